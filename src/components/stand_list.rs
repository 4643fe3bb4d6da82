use std::rc::Rc;
use yew::prelude::*;

use crate::floorplan::Floor;
use crate::model::StandRecord;

#[derive(Properties, PartialEq, Clone)]
pub struct StandListProps {
    pub stands: Rc<Vec<StandRecord>>,
    pub floor: Floor,
}

/// The stands located on one floor, as "id (room). title" rows.
#[function_component(StandList)]
pub fn stand_list(props: &StandListProps) -> Html {
    html! {
        <div>
            { for props
                .stands
                .iter()
                .filter(|stand| props.floor.contains(stand.location_id))
                .map(|stand| html! {
                    <p style="margin:6px 0;">
                        <b>{ format!("{} ({}).", stand.location_id, stand.location) }</b>
                        {" "}
                        { stand.title.clone() }
                    </p>
                }) }
        </div>
    }
}
