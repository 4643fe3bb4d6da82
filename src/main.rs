use yew_event_map::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
