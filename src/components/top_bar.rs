use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TopBarProps {
    pub title: String,
    /// Back arrow, shown while the plano is open.
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
    /// The "Materias" action, shown on the schedule screen.
    #[prop_or_default]
    pub on_stands: Option<Callback<()>>,
}

#[function_component(TopBar)]
pub fn top_bar(props: &TopBarProps) -> Html {
    let back_button = match props.on_back.clone() {
        Some(cb) => {
            let onclick = Callback::from(move |_| cb.emit(()));
            html! {
                <button onclick={onclick} style="background:none; border:none; color:inherit; font-size:22px; cursor:pointer; padding:0 4px;">{"←"}</button>
            }
        }
        None => html! {},
    };
    let stands_button = match props.on_stands.clone() {
        Some(cb) => {
            let onclick = Callback::from(move |_| cb.emit(()));
            html! {
                <button onclick={onclick} style="background:none; border:none; color:inherit; font-size:14px; font-weight:600; text-transform:uppercase; cursor:pointer;">{"Materias"}</button>
            }
        }
        None => html! {},
    };

    html! {
        <div id="top-bar" style="display:flex; align-items:center; gap:12px; padding:12px 16px; background:#1976d2; color:#fff;">
            { back_button }
            <div style="flex-grow:1; font-size:20px; font-weight:600;">{ props.title.clone() }</div>
            { stands_button }
        </div>
    }
}
