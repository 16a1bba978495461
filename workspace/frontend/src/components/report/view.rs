use common::{Catalog, CitationRegistry, ReportAction, Section};
use std::rc::Rc;
use yew::prelude::*;

use super::data::DataSection;
use super::header::ReportHeader;
use super::navigation::SectionNavigation;
use super::overview::OverviewSection;
use super::quantitative::QuantitativeSection;
use super::reasoning::ReasoningSection;
use super::references::References;
use super::resources::ResourcesSection;
use super::verbal::VerbalSection;
use crate::hooks::use_report_state;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub catalog: Rc<Catalog>,
}

/// Composition root: owns the UI state and always builds all six sections,
/// hiding the inactive ones.
#[function_component(ReportPage)]
pub fn report_page(props: &Props) -> Html {
    let report = use_report_state();
    let citations: Rc<CitationRegistry> =
        use_memo(props.catalog.clone(), |catalog| catalog.citations.clone());

    let on_select = {
        let report = report.clone();
        Callback::from(move |section: Section| {
            log::debug!("Selecting section {}", section);
            report.dispatch(ReportAction::SelectSection(section));
        })
    };

    let on_toggle = {
        let report = report.clone();
        Callback::from(move |key: String| {
            log::debug!("Toggling topic {}", key);
            report.dispatch(ReportAction::ToggleTopic(key));
        })
    };

    let state = report.0.clone();
    let catalog = props.catalog.clone();

    html! {
        <div class="w-full max-w-7xl mx-auto space-y-6 p-4 bg-gray-50 min-h-screen">
            <ReportHeader
                headline={catalog.headline.clone()}
                banner={catalog.images.banner.clone()}
            />
            <SectionNavigation active={state.active_section()} on_select={on_select} />

            <OverviewSection
                catalog={catalog.clone()}
                citations={citations.clone()}
                visible={state.is_visible(Section::Overview)}
            />
            <QuantitativeSection
                catalog={catalog.clone()}
                citations={citations.clone()}
                visible={state.is_visible(Section::Quantitative)}
                state={state.clone()}
                on_toggle={on_toggle.clone()}
            />
            <ReasoningSection
                catalog={catalog.clone()}
                citations={citations.clone()}
                visible={state.is_visible(Section::Reasoning)}
                state={state.clone()}
                on_toggle={on_toggle}
            />
            <VerbalSection
                catalog={catalog.clone()}
                citations={citations.clone()}
                visible={state.is_visible(Section::Verbal)}
            />
            <DataSection
                catalog={catalog.clone()}
                visible={state.is_visible(Section::Data)}
            />
            <ResourcesSection
                catalog={catalog.clone()}
                citations={citations.clone()}
                visible={state.is_visible(Section::Resources)}
            />

            <References citations={citations} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render_page() -> String {
        yew::LocalServerRenderer::<ReportPage>::with_props(Props {
            catalog: Rc::new(Catalog::builtin()),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_all_sections_mounted_only_overview_shown() {
        let html = render_page().await;

        assert_eq!(html.matches("<section").count(), Section::ALL.len());
        assert_eq!(html.matches(r#"class="hidden""#).count(), 5);
        assert_eq!(html.matches(r#"class="block""#).count(), 1);
        for section in Section::ALL {
            assert!(html.contains(&format!(r#"id="section-{}""#, section.id())));
        }
    }

    #[tokio::test]
    async fn test_topics_start_collapsed_and_references_listed() {
        let html = render_page().await;

        let topics = Catalog::builtin().expandable_topics().count();
        assert_eq!(html.matches("fa-chevron-down").count(), topics);
        assert!(!html.contains("fa-chevron-up"));
        assert!(html.contains("References:"));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }
}
