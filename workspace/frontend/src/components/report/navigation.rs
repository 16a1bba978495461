use common::Section;
use yew::prelude::*;

use super::section::nav_icon;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: Section,
    pub on_select: Callback<Section>,
}

/// One button per section; every section is one click away.
#[function_component(SectionNavigation)]
pub fn section_navigation(props: &Props) -> Html {
    html! {
        <nav class="flex flex-wrap gap-2 justify-center bg-white p-4 rounded-lg shadow-sm">
            { for Section::ALL.into_iter().map(|section| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(section))
                };
                let style = if section == props.active {
                    "bg-blue-600 text-white shadow-md"
                } else {
                    "bg-gray-100 hover:bg-gray-200 text-gray-700"
                };

                html! {
                    <button
                        key={section.id()}
                        onclick={onclick}
                        title={section.label()}
                        class={classes!("flex", "items-center", "gap-2", "px-4", "py-2", "rounded-lg", "transition-all", style)}
                    >
                        <i class={nav_icon(section)}></i>
                        <span class="hidden sm:inline">{section.label()}</span>
                    </button>
                }
            }) }
        </nav>
    }
}
