//! Dashboard Page
//!
//! Overview statistics for a selected period: stat cards, the urgency time
//! series, and the day-by-hour usage grid rendered as plain tables.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;

use crate::api;
use crate::listing::FetchGuard;
use crate::models::{DashboardOverview, Period};
use crate::store::{store_show_snack, use_app_store, AppStateStoreFields, Severity};

struct StatCard {
    title: &'static str,
    value: i64,
    change: f64,
}

fn stat_cards(data: &DashboardOverview) -> Vec<StatCard> {
    let cards = &data.stats_cards;
    vec![
        StatCard {
            title: "Total Queries",
            value: cards.query_stats.n_questions,
            change: cards.query_stats.percentage_increase,
        },
        StatCard {
            title: "Total Escalated Queries",
            value: cards.response_feedback_stats.n_negative,
            change: cards.response_feedback_stats.percentage_negative_increase,
        },
        StatCard {
            title: "Total Urgent Queries",
            value: cards.urgency_stats.n_urgent,
            change: cards.urgency_stats.percentage_increase,
        },
        StatCard {
            title: "Total Upvotes",
            value: cards.content_feedback_stats.n_positive,
            change: cards.content_feedback_stats.percentage_positive_increase,
        },
        StatCard {
            title: "Total Downvotes",
            value: cards.content_feedback_stats.n_negative,
            change: cards.content_feedback_stats.percentage_negative_increase,
        },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();

    let (period, set_period) = signal(Period::Week);
    let (data, set_data) = signal::<Option<DashboardOverview>>(None);
    let guard = StoredValue::new(FetchGuard::new());

    Effect::new(move |_| {
        let Some(token) = store.token().get() else {
            return;
        };
        let selected = period.get();
        guard.update_value(|g| {
            g.issue();
        });
        let ticket = guard.with_value(|g| g.current());
        spawn_local(async move {
            match api::get_overview(selected, &token).await {
                Ok(overview) => {
                    if guard.with_value(|g| g.is_current(ticket)) {
                        set_data.set(Some(overview));
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&e.into());
                    if guard.with_value(|g| g.is_current(ticket)) {
                        store_show_snack(&store, Severity::Error, "Failed to fetch dashboard data");
                    }
                }
            }
        });
    });

    view! {
        <div class="dashboard">
            <div class="page-header">
                <h2>"Overview"</h2>
                <div class="period-tabs">
                    {Period::ALL.iter().map(|p| {
                        let p = *p;
                        view! {
                            <button
                                class=move || {
                                    if period.get() == p { "tab active" } else { "tab" }
                                }
                                on:click=move |_| set_period.set(p)
                            >
                                {p.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            {move || match data.get() {
                None => view! { <div class="dashboard-loading">"Loading..."</div> }.into_any(),
                Some(overview) => {
                    let cards = stat_cards(&overview);
                    let series = &overview.time_series;
                    let periods: BTreeSet<String> = series
                        .urgent
                        .keys()
                        .chain(series.not_urgent_escalated.keys())
                        .chain(series.not_urgent_not_escalated.keys())
                        .cloned()
                        .collect();
                    let days: BTreeSet<String> = overview
                        .heatmap
                        .values()
                        .flat_map(|row| row.keys().cloned())
                        .collect();

                    view! {
                        <div class="stat-cards">
                            {cards.into_iter().map(|card| view! {
                                <div class="stat-card">
                                    <span class="stat-title">{card.title}</span>
                                    <span class="stat-value">{card.value.to_string()}</span>
                                    <span class="stat-change">
                                        {format!("{:+.1}% vs previous {}", card.change, period.get_untracked().as_str())}
                                    </span>
                                </div>
                            }).collect_view()}
                        </div>

                        <h3>"Urgency over time"</h3>
                        <table class="series-table">
                            <thead>
                                <tr>
                                    <th>"Period"</th>
                                    <th>"Urgent"</th>
                                    <th>"Escalated"</th>
                                    <th>"Total Queries"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {periods.iter().map(|key| {
                                    let urgent = series.urgent.get(key).copied().unwrap_or(0.0);
                                    let escalated = series
                                        .not_urgent_escalated
                                        .get(key)
                                        .copied()
                                        .unwrap_or(0.0);
                                    let total = series
                                        .not_urgent_not_escalated
                                        .get(key)
                                        .copied()
                                        .unwrap_or(0.0);
                                    view! {
                                        <tr>
                                            <td>{key.clone()}</td>
                                            <td>{format!("{urgent}")}</td>
                                            <td>{format!("{escalated}")}</td>
                                            <td>{format!("{total}")}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>

                        <h3>"Usage by day and hour"</h3>
                        <table class="heatmap-table">
                            <thead>
                                <tr>
                                    <th>"Hour"</th>
                                    {days.iter().map(|day| view! {
                                        <th>{day.clone()}</th>
                                    }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {overview.heatmap.iter().map(|(hour, row)| view! {
                                    <tr>
                                        <td>{hour.clone()}</td>
                                        {days.iter().map(|day| {
                                            let count = row.get(day).copied().unwrap_or(0.0);
                                            view! { <td>{format!("{count}")}</td> }
                                        }).collect_view()}
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </div>
    }
}
