use dioxus::prelude::*;
use time::Month;

use crate::core::config::PortfolioConfig;
use crate::t;

use super::calendar;
use super::series::{load_activity, ActivitySeries, DAYS_IN_SERIES};
use super::tier::IntensityTier;

#[component]
pub fn ActivityHeatmap(config: PortfolioConfig) -> Element {
    // Fetched once on mount; the series is recomputed on the next mount only.
    let activity = use_resource(move || {
        let config = config.clone();
        async move { load_activity(&config).await }
    });

    let series: Option<ActivitySeries> = (*activity.read()).clone();

    let Some(series) = series else {
        return rsx! {
            div { class: "heatmap heatmap--loading",
                p { class: "heatmap__status", {t!("heatmap-loading")} }
                div { class: "heatmap__grid",
                    for index in 0..DAYS_IN_SERIES {
                        div { key: "{index}", class: "heatmap__cell heatmap__cell--pending" }
                    }
                }
            }
        };
    };

    let last_day = series.last_day;
    let months: Vec<String> = calendar::months_covered(last_day)
        .into_iter()
        .map(month_label)
        .collect();
    let active_days = series.intensity.active_days() as u32;
    let caption = if series.is_synthetic() {
        t!("heatmap-caption-sample")
    } else {
        t!("heatmap-caption-live", days = active_days)
    };

    rsx! {
        div { class: "heatmap",
            div { class: "heatmap__months",
                for (index, month) in months.into_iter().enumerate() {
                    span { key: "{index}", "{month}" }
                }
            }

            div { class: "heatmap__grid",
                for (index, tier) in series.intensity.tiers().enumerate() {
                    div {
                        key: "{index}",
                        class: "heatmap__cell {tier.css_class()}",
                        title: cell_title(tier.level(), calendar::day_at(last_day, index)),
                    }
                }
            }

            div { class: "heatmap__legend",
                span { {t!("heatmap-legend-less")} }
                div { class: "heatmap__legend-swatches",
                    for tier in IntensityTier::ALL {
                        div { key: "{tier.level()}", class: "heatmap__cell {tier.css_class()}" }
                    }
                }
                span { {t!("heatmap-legend-more")} }
            }

            p { class: "heatmap__caption", "{caption}" }
        }
    }
}

fn cell_title(level: u8, day: time::Date) -> String {
    let date = calendar::format_day(day);
    t!("heatmap-cell-title", count = u32::from(level), date = date)
}

fn month_label(month: Month) -> String {
    match month {
        Month::January => t!("month-jan"),
        Month::February => t!("month-feb"),
        Month::March => t!("month-mar"),
        Month::April => t!("month-apr"),
        Month::May => t!("month-may"),
        Month::June => t!("month-jun"),
        Month::July => t!("month-jul"),
        Month::August => t!("month-aug"),
        Month::September => t!("month-sep"),
        Month::October => t!("month-oct"),
        Month::November => t!("month-nov"),
        Month::December => t!("month-dec"),
    }
}
