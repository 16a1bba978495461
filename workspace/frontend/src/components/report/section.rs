use common::Section;
use yew::prelude::*;

/// Font Awesome icon and accent color per section.
pub fn section_icon(section: Section) -> &'static str {
    match section {
        Section::Overview => "fas fa-bullseye text-blue-600",
        Section::Quantitative => "fas fa-calculator text-blue-600",
        Section::Reasoning => "fas fa-brain text-green-600",
        Section::Verbal => "fas fa-comment-dots text-yellow-600",
        Section::Data => "fas fa-chart-bar text-red-600",
        Section::Resources => "fas fa-file-alt text-purple-600",
    }
}

/// Navigation button icon; same glyph without the accent color.
pub fn nav_icon(section: Section) -> &'static str {
    match section {
        Section::Overview => "fas fa-book-open",
        Section::Quantitative => "fas fa-calculator",
        Section::Reasoning => "fas fa-brain",
        Section::Verbal => "fas fa-comment-dots",
        Section::Data => "fas fa-chart-bar",
        Section::Resources => "fas fa-file-alt",
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub section: Section,
    pub visible: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Section body. Hidden sections stay mounted so their topic state and
/// charts survive navigation.
#[function_component(SectionFrame)]
pub fn section_frame(props: &Props) -> Html {
    html! {
        <section
            id={format!("section-{}", props.section.id())}
            class={classes!(if props.visible { "block" } else { "hidden" })}
        >
            <div class="flex items-center gap-3 mb-6">
                <i class={classes!(section_icon(props.section), "text-3xl")}></i>
                <h2 class="text-2xl sm:text-3xl font-bold text-gray-800">{props.section.title()}</h2>
            </div>
            { for props.children.iter() }
        </section>
    }
}

/// Bulleted list used by the prose cards.
pub fn bullet_list(items: &[&str], class: &'static str) -> Html {
    html! {
        <ul class={class}>
            { for items.iter().map(|item| html! { <li>{format!("• {}", item)}</li> }) }
        </ul>
    }
}
