//! Spring-following cursor dot with a fading ink trail.
//!
//! Wraps its children; pointer movement anywhere inside sets the spring
//! target and records trail dots. A slow timer removes the oldest dot so the
//! trail drains when the pointer rests.

#[cfg(test)]
#[path = "custom_cursor_test.rs"]
mod custom_cursor_test;

use gallery::config::SpringConfig;
use gallery::geom::Point;
use gallery::motion::Spring;
use gallery::trail::{InkTrail, TrailDot, dot_style};
use leptos::prelude::*;

use crate::util::dom::translate_px;

/// Inline style for the trail dot at `index` (0 = oldest).
#[must_use]
pub fn trail_dot_style(position: Point, index: usize) -> String {
    let style = dot_style(index);
    format!(
        "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; opacity: {:.3};",
        position.x, position.y, style.size_px, style.size_px, style.alpha
    )
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct CursorState {
    spring: Spring,
    target: Point,
    seen: bool,
    ink: InkTrail,
}

impl CursorState {
    fn new() -> Self {
        Self {
            spring: Spring::new(SpringConfig::CURSOR, Point::ZERO),
            target: Point::ZERO,
            seen: false,
            ink: InkTrail::new(),
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn dots(&self) -> Vec<TrailDot> {
        self.ink.dots().copied().collect()
    }
}

#[component]
pub fn CustomCursor(children: Children) -> impl IntoView {
    let position = RwSignal::new(Point::ZERO);
    let visible = RwSignal::new(false);
    let trail = RwSignal::new(Vec::<TrailDot>::new());
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let state = StoredValue::new(CursorState::new());

    #[cfg(feature = "hydrate")]
    let frames = StoredValue::new_local(crate::util::frame_driver::FrameDriver::new(move |dt_ms| {
        state
            .try_update_value(|s| {
                let moving = s.spring.step(s.target, dt_ms / 1000.0);
                position.set(s.spring.position());
                moving
            })
            .unwrap_or(false)
    }));

    #[cfg(feature = "hydrate")]
    {
        let fade_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let fade_alive_task = fade_alive.clone();
        let interval = u64::from(gallery::consts::TRAIL_FADE_INTERVAL_MS);
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(interval)).await;
                if !fade_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let faded = state.try_update_value(|s| s.ink.fade_oldest().then(|| s.dots()));
                match faded {
                    None => break,
                    Some(Some(dots)) => trail.set(dots),
                    Some(None) => {}
                }
            }
        });
        on_cleanup(move || fade_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let client = crate::util::dom::client_point(&ev);
                let now = crate::util::dom::now_ms();
                let recorded = state
                    .try_update_value(|s| {
                        if !s.seen {
                            s.seen = true;
                            s.spring.jump_to(client);
                        }
                        s.target = client;
                        s.ink.record(client, now).then(|| s.dots())
                    })
                    .flatten();
                if let Some(dots) = recorded {
                    trail.set(dots);
                }
                visible.set(true);
                frames.with_value(crate::util::frame_driver::FrameDriver::schedule);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let dots = move || {
        trail
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, dot)| view! { <div class="ink-trail__dot" style=trail_dot_style(dot.position, index)></div> })
            .collect_view()
    };

    view! {
        <div class="cursor-scope" on:pointermove=on_pointer_move on:pointerleave=move |_| visible.set(false)>
            {children()}
            <div class="ink-trail" aria-hidden="true">{dots}</div>
            <div
                class="custom-cursor"
                class:custom-cursor--hidden=move || !visible.get()
                aria-hidden="true"
                style:transform=move || translate_px(position.get())
            ></div>
        </div>
    }
}
