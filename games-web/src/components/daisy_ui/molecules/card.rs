use crate::components::daisy_ui::foundation as f;

/// Panel with a heading. The heading names the region for assistive tech.
#[derive(f::Properties, PartialEq, Clone)]
pub struct CardProps {
    pub title: f::AttrValue,
    /// Element id for the heading; also used as `aria-labelledby`.
    pub heading_id: f::AttrValue,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Card)]
pub fn card(props: &CardProps) -> f::Html {
    let class = f::class_list(&["card", "bg-base-100", "shadow-xl"], &props.class);
    f::html! {
        <section {class} aria-labelledby={props.heading_id.clone()}>
            <div class="card-body gap-4">
                <h2 id={props.heading_id.clone()} class="card-title">{ props.title.clone() }</h2>
                { for props.children.iter() }
            </div>
        </section>
    }
}
