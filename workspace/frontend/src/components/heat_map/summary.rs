use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RiskSummaryProps {
    #[prop_or_default]
    pub line: Option<String>,
}

#[function_component(RiskSummary)]
pub fn risk_summary(props: &RiskSummaryProps) -> Html {
    match &props.line {
        Some(line) => html! { <p class="mt-2 font-semibold">{line}</p> },
        None => html! {},
    }
}
