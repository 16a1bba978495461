use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
    /// Extra classes appended to the base frame
    #[prop_or_default]
    pub class: Classes,
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(Card)]
pub fn card(props: &Props) -> Html {
    html! {
        <div class={classes!("bg-white", "rounded-lg", "shadow", "p-4", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardHeader)]
pub fn card_header(props: &HeaderProps) -> Html {
    html! {
        <div class={classes!("mb-2", props.class.clone())} onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardTitle)]
pub fn card_title(props: &Props) -> Html {
    html! {
        <h3 class={classes!("text-lg", "font-bold", props.class.clone())}>
            { for props.children.iter() }
        </h3>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &Props) -> Html {
    html! {
        <div class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}
