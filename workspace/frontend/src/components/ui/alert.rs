use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Alert)]
pub fn alert(props: &Props) -> Html {
    html! {
        <div class={classes!("border-l-4", "border-blue-500", "bg-blue-50", "p-4", "rounded-lg", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(AlertTitle)]
pub fn alert_title(props: &Props) -> Html {
    html! {
        <div class={classes!("font-bold", "mb-1", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(AlertDescription)]
pub fn alert_description(props: &Props) -> Html {
    html! {
        <div class={classes!("text-sm", "text-gray-700", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
