use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::{CANVAS_HEIGHT, CANVAS_WIDTH, EgoGraphState, ViewBox};
use crate::layout::{LayoutConfig, Point, Snapshot, TickStatus};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Schedules `callback` for the next animation frame; `false` if that failed.
fn request_frame(callback: &FrameCallback) -> bool {
	let Some(window) = web_sys::window() else {
		return false;
	};
	let callback = callback.borrow();
	let Some(cb) = callback.as_ref() else {
		return false;
	};
	match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		Ok(_) => true,
		Err(err) => {
			error!("requestAnimationFrame failed: {err:?}");
			false
		}
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	match canvas.get_context("2d") {
		Ok(Some(ctx)) => ctx.dyn_into().ok(),
		Ok(None) => None,
		Err(err) => {
			error!("Canvas 2d context unavailable: {err:?}");
			None
		}
	}
}

fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let view = ViewBox::from_rect(&canvas.get_bounding_client_rect());
	Some(view.to_canvas(ev.client_x() as f64, ev.client_y() as f64))
}

#[component]
pub fn EgoGraphCanvas(#[prop(into)] data: Signal<Snapshot>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = Rc::new(RefCell::new(EgoGraphState::new(LayoutConfig::default())));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));

	let alive_cleanup = alive.clone();
	on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let snapshot = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		if animate_init.borrow().is_none() {
			let Some(ctx) = context_2d(&canvas) else {
				warn!("No 2d context, graph will not be drawn");
				return;
			};
			canvas.set_width(CANVAS_WIDTH as u32);
			canvas.set_height(CANVAS_HEIGHT as u32);

			let (state_anim, animate_inner, alive_anim) =
				(state_init.clone(), animate_init.clone(), alive.clone());
			*animate_init.borrow_mut() = Some(Closure::new(move || {
				let mut s = state_anim.borrow_mut();
				if !alive_anim.load(Ordering::Relaxed) {
					s.running = false;
					return;
				}
				let status = s.layout.tick();
				render::render(&s, &ctx);
				// An empty layout renders one blank frame, then the loop parks
				// until the next load.
				s.running = status == TickStatus::Advanced && request_frame(&animate_inner);
			}));
		}

		let mut s = state_init.borrow_mut();
		s.layout.load(&snapshot, &mut rand::thread_rng());
		if !s.running {
			s.running = request_frame(&animate_init);
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(point) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let mut s = state_md.borrow_mut();
		if let Some(id) = s.node_at(point).map(str::to_owned) {
			s.layout.press(&id, point);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(point) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		state_mm.borrow_mut().layout.move_pointer(point);
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		state_mu.borrow_mut().layout.release();
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		state_ml.borrow_mut().layout.release();
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="ego-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; width: 100%; aspect-ratio: 4 / 3; cursor: grab;"
		/>
	}
}
