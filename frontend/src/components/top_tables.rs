use shared::{PageRow, ReferrerRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TopPagesProps {
    pub pages: Vec<PageRow>,
}

#[function_component(TopPages)]
pub fn top_pages(props: &TopPagesProps) -> Html {
    html! {
        <div class="top-pages">
            <h4>{"Top pages"}</h4>
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <td class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"URL"}</td>
                        <td class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Pageviews"}</td>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {for props.pages.iter().map(|row| html! {
                        <tr>
                            <td class="px-4 py-2">{row.url.clone()}</td>
                            <td class="px-4 py-2">{row.pageviews}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopReferrersProps {
    pub referrers: Vec<ReferrerRow>,
}

#[function_component(TopReferrers)]
pub fn top_referrers(props: &TopReferrersProps) -> Html {
    html! {
        <div class="top-referrers">
            <h4>{"Top referrers"}</h4>
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <td class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Host"}</td>
                        <td class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Pageviews"}</td>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {for props.referrers.iter().map(|row| html! {
                        <tr>
                            <td class="px-4 py-2">{row.host.clone()}</td>
                            <td class="px-4 py-2">{row.pageviews}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
