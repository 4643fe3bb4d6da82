use std::rc::Rc;
use yew::prelude::*;

use crate::model::{EventRecord, split_events};
use crate::util::format_clock;

#[derive(Properties, PartialEq, Clone)]
pub struct EventListProps {
    pub events: Rc<Vec<EventRecord>>,
    pub on_select: Callback<i32>,
}

/// The schedule screen: upcoming events first, a divider, then the ones
/// already under way.
#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    let (upcoming, started) = split_events(&props.events, js_sys::Date::now());

    html! {
        <div>
            <div style="padding:10px 16px; background:#e5f6fd; color:#014361; font-size:14px;">
                {"Puedes presionar los eventos para abrirlos en el plano, o seleccionar 'Materias' para ver los estands correspondientes a cada una."}
            </div>
            <div>
                { for upcoming.iter().map(|event| html! {
                    <EventRow event={event.clone()} on_select={props.on_select.clone()} />
                }) }
            </div>
            <hr style="border:none; border-top:1px solid #d0d7de; margin:4px 0;" />
            <div>
                { for started.iter().map(|event| html! {
                    <EventRow event={event.clone()} on_select={props.on_select.clone()} />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EventRowProps {
    pub event: EventRecord,
    pub on_select: Callback<i32>,
}

#[function_component(EventRow)]
pub fn event_row(props: &EventRowProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let id = props.event.id;
        Callback::from(move |_| on_select.emit(id))
    };

    html! {
        <div onclick={onclick} style="padding:10px 16px; cursor:pointer; border-bottom:1px solid #f0f0f0;">
            <div>{ props.event.title.clone() }</div>
            <div style="font-size:13px; opacity:0.7;">
                { format!("{} hs | {}", format_clock(props.event.time), props.event.location) }
            </div>
        </div>
    }
}
