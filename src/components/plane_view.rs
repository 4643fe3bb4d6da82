use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::floorplan::{CANVAS_HEIGHT, CANVAS_WIDTH, Canvas2d, DrawSurface, Floor, render};
use crate::model::{self, EventRecord, StandRecord};
use crate::util::clog;

use super::stand_list::StandList;

#[derive(Properties, PartialEq, Clone)]
pub struct PlaneViewProps {
    /// The event being shown, or `None` for stands mode.
    #[prop_or_default]
    pub selected_event: Option<EventRecord>,
    pub stands: Rc<Vec<StandRecord>>,
}

/// The plano screen: the floor canvas plus either the selected event's
/// details or the per-floor stand browser.
#[function_component(PlaneView)]
pub fn plane_view(props: &PlaneViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let stand_floor = use_state(|| Floor::Gymnasium);

    let highlight = props.selected_event.as_ref().and_then(model::highlight_for);
    let floor = match &props.selected_event {
        Some(_) => model::floor_for(highlight),
        None => *stand_floor,
    };

    // Redraw whenever the shown floor or highlight changes
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((floor, highlight), move |deps| {
            let (floor, highlight) = *deps;
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");
            match canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            {
                Some(ctx) => {
                    clog(&format!(
                        "plano: drawing {} (highlight {:?})",
                        floor.label(),
                        highlight
                    ));
                    let mut surface = Canvas2d::new(ctx);
                    surface.clear_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
                    render(&mut surface, floor, highlight);
                }
                None => clog("plano: canvas has no 2d context, skipping draw"),
            }
            || ()
        });
    }

    let side_panel = match &props.selected_event {
        Some(event) => html! {
            <div>
                <h2 style="margin:0 0 12px 0;">{ floor.label() }</h2>
                <p style="margin:4px 0;">
                    {"El evento seleccionado tiene lugar en '"}
                    <b>{ event.location.clone() }</b>
                    { if highlight.is_some() { "', que se encuentra marcada en amarillo." } else { "'." } }
                </p>
            </div>
        },
        None => {
            let floor_buttons = Floor::ALL.iter().map(|&f| {
                let stand_floor = stand_floor.clone();
                let style = if f == *stand_floor {
                    "padding:6px 10px; border:1px solid #1976d2; border-radius:4px; background:#1976d2; color:#fff; cursor:pointer;"
                } else {
                    "padding:6px 10px; border:1px solid #1976d2; border-radius:4px; background:none; color:#1976d2; cursor:pointer;"
                };
                let onclick = Callback::from(move |_| stand_floor.set(f));
                html! { <button onclick={onclick} style={style}>{ f.label() }</button> }
            });
            html! {
                <div>
                    <div style="display:flex; gap:6px; margin-bottom:12px;">{ for floor_buttons }</div>
                    <StandList stands={props.stands.clone()} floor={*stand_floor} />
                </div>
            }
        }
    };

    html! {
        <div style="display:flex; flex-wrap:wrap; gap:20px; padding:20px;">
            <canvas ref={canvas_ref} width="450" height="600"></canvas>
            <div style="flex:1; min-width:260px;">{ side_panel }</div>
        </div>
    }
}
