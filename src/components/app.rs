use leptos::prelude::*;
use roto_core::{Direction, Options};
use crate::components::carousel::Carousel;

const PHOTO_COUNT: usize = 12;
const HEADLINES: &[&str] = &[
    "Rain moves east overnight",
    "Harbour ferry timetable changes",
    "Library extends weekend hours",
    "Bridge repairs finish early",
    "Market returns to the square",
    "New cycle lanes open",
    "Museum reopens north wing",
];

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <h2>"Horizontal"</h2>
            <PhotoStrip />
            <h2>"Vertical"</h2>
            <HeadlineTicker />
        </div>
    }
}

#[component]
fn PhotoStrip() -> impl IntoView {
    let photos = (1..=PHOTO_COUNT)
        .map(|i| {
            let hue = i * 360 / PHOTO_COUNT;
            view! {
                <li style=format!("width: 160px; height: 120px; margin-right: 8px; background: hsl({hue}, 55%, 55%);")>
                    <a href=format!("#photo-{i}")>{format!("Photo {i}")}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <Carousel id="photos" style="width: 520px;">
            {photos}
        </Carousel>
    }
}

#[component]
fn HeadlineTicker() -> impl IntoView {
    let options = Options {
        direction: Direction::Vertical,
        pull_amount: 80.0,
        ..Options::default()
    };
    let headlines = HEADLINES
        .iter()
        .map(|h| view! { <li style="height: 40px; width: 100%;">{*h}</li> })
        .collect_view();

    view! {
        <Carousel id="headlines" style="width: 320px; height: 120px;" options=options>
            {headlines}
        </Carousel>
    }
}
