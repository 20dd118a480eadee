use shared::{ChartBucket, Resolution};
use yew::prelude::*;

const MAX_BAR_HEIGHT: u32 = 120;

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub buckets: Vec<ChartBucket>,
    pub resolution: Resolution,
    pub is_operator: bool,
}

/// Bar height in pixels, scaled against the busiest bucket. Non-zero
/// values never collapse below 1px.
pub fn bar_height(value: u64, max: u64, cap: u32) -> u32 {
    if value == 0 || max == 0 {
        return 0;
    }
    let scaled = (value as f64 / max as f64 * cap as f64).round() as u32;
    scaled.max(1)
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let entity_label = if props.is_operator { "visitors" } else { "accounts" };
    let max = props
        .buckets
        .iter()
        .map(|bucket| bucket.pageviews.max(bucket.visitors))
        .max()
        .unwrap_or(0);

    if props.buckets.is_empty() {
        return html! {
            <div class="no-data">{"No pageview data available"}</div>
        };
    }

    html! {
        <div class="bar-chart">
            <div class="flex items-end space-x-2">
                {for props.buckets.iter().map(|bucket| {
                    let pageviews_px = bar_height(bucket.pageviews, max, MAX_BAR_HEIGHT);
                    let visitors_px = bar_height(bucket.visitors, max, MAX_BAR_HEIGHT);
                    let label = props.resolution.bucket_label(bucket.date);
                    let title = format!(
                        "{} — {} pageviews, {} {}",
                        label, bucket.pageviews, bucket.visitors, entity_label
                    );
                    html! {
                        <div class="flex flex-col items-center" title={title}>
                            <div class="flex items-end space-x-0.5" style={format!("height: {}px", MAX_BAR_HEIGHT)}>
                                <div
                                    class="w-3 rounded-t bg-blue-600"
                                    style={format!("height: {}px", pageviews_px)}
                                ></div>
                                <div
                                    class="w-3 rounded-t bg-blue-200"
                                    style={format!("height: {}px", visitors_px)}
                                ></div>
                            </div>
                            <div class="mt-1 text-[10px] text-gray-500">{label}</div>
                        </div>
                    }
                })}
            </div>
            <div class="mt-3 flex items-center space-x-2 text-xs text-gray-600">
                <div class="w-3 h-3 rounded bg-blue-600"></div>
                <span>{"Pageviews"}</span>
                <div class="w-3 h-3 rounded bg-blue-200"></div>
                <span>{entity_label}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_against_the_busiest_bucket() {
        assert_eq!(bar_height(50, 100, 120), 60);
        assert_eq!(bar_height(100, 100, 120), 120);
    }

    #[test]
    fn empty_buckets_yield_no_height() {
        assert_eq!(bar_height(0, 100, 120), 0);
        assert_eq!(bar_height(0, 0, 120), 0);
        assert_eq!(bar_height(5, 0, 120), 0);
    }

    #[test]
    fn small_values_stay_visible() {
        assert_eq!(bar_height(1, 100_000, 120), 1);
    }
}
