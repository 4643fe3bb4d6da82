use yew::prelude::*;

use crate::model;

use super::event_list::EventList;
use super::plane_view::PlaneView;
use super::top_bar::TopBar;

#[derive(PartialEq, Clone)]
enum View {
    Events,
    Plane,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Events);
    let selected_event_id = use_state(|| None::<i32>);
    let events = use_memo((), |_| model::load_events());
    let stands = use_memo((), |_| model::load_stands());

    let open_event = {
        let view = view.clone();
        let selected_event_id = selected_event_id.clone();
        Callback::from(move |id: i32| {
            selected_event_id.set(Some(id));
            view.set(View::Plane);
        })
    };
    let open_stands = {
        let view = view.clone();
        let selected_event_id = selected_event_id.clone();
        Callback::from(move |_| {
            selected_event_id.set(None);
            view.set(View::Plane);
        })
    };
    let back_to_events = {
        let view = view.clone();
        let selected_event_id = selected_event_id.clone();
        Callback::from(move |_| {
            selected_event_id.set(None);
            view.set(View::Events);
        })
    };

    let selected_event =
        (*selected_event_id).and_then(|id| events.iter().find(|event| event.id == id).cloned());

    html! {
        <div id="root">
            {
                match (*view).clone() {
                    View::Events => html! { <>
                        <TopBar title={"Eventos".to_string()} on_stands={open_stands.clone()} />
                        <EventList events={events.clone()} on_select={open_event.clone()} />
                    </> },
                    View::Plane => {
                        let title = match &selected_event {
                            Some(event) => format!("Plano | {}", event.title),
                            None => "Plano | Materias".to_string(),
                        };
                        html! { <>
                            <TopBar title={title} on_back={back_to_events.clone()} />
                            <PlaneView selected_event={selected_event.clone()} stands={stands.clone()} />
                        </> }
                    }
                }
            }
        </div>
    }
}
