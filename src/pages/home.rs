use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use log::warn;

use crate::components::ego_graph::EgoGraphCanvas;
use crate::layout::{Direction, Role, Snapshot, SnapshotLink, SnapshotNode};

/// Generate a sample ego network around `handle`, with some mutual follows.
fn sample_snapshot(handle: &str, following: usize, followers: usize) -> Snapshot {
	let focal = SnapshotNode {
		id: "0".into(),
		label: format!("@{handle}"),
		role: Role::Focal,
	};
	let mut nodes = vec![focal];
	let mut links = Vec::new();

	for i in 1..=following {
		nodes.push(SnapshotNode {
			id: i.to_string(),
			label: format!("@following_{i}"),
			role: Role::Outbound,
		});
		links.push(SnapshotLink {
			source: "0".into(),
			target: i.to_string(),
			direction: Direction::Outbound,
		});
	}

	for i in 1..=followers {
		// Roughly a third of the followers are followed back.
		let id = if rand_simple(i) < 0.33 && i <= following {
			i.to_string()
		} else {
			(following + i).to_string()
		};
		nodes.push(SnapshotNode {
			id: id.clone(),
			label: format!("@follower_{i}"),
			role: Role::Inbound,
		});
		links.push(SnapshotLink {
			source: id,
			target: "0".into(),
			direction: Direction::Inbound,
		});
	}

	Snapshot { nodes, links }
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let (snapshot, set_snapshot) = signal(sample_snapshot("ferris", 14, 10));
	let (body, set_body) = signal(String::new());
	let (error, set_error) = signal(None::<String>);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		match Snapshot::from_json(&body.get_untracked()) {
			Ok(loaded) => {
				set_error.set(None);
				set_snapshot.set(loaded);
			}
			Err(err) => {
				warn!("Rejected network data: {err}");
				set_error.set(Some(err.to_string()));
			}
		}
	};

	let load_sample = move |_: MouseEvent| {
		set_error.set(None);
		set_snapshot.set(sample_snapshot("ferris", 14, 10));
	};

	view! {
		<div class="network-page">
			<h1>"Ego Network"</h1>
			<p class="subtitle">"Paste the network endpoint's JSON to lay it out. Drag nodes to reposition."</p>
			<form class="network-form" on:submit=on_submit>
				<textarea
					rows="4"
					placeholder="{\"nodes\": [...], \"links\": [...]}"
					prop:value=move || body.get()
					on:input=move |ev| set_body.set(event_target_value(&ev))
				/>
				<button type="submit" disabled=move || body.with(|b| b.trim().is_empty())>
					"Load Network"
				</button>
				<button type="button" on:click=load_sample>
					"Sample"
				</button>
			</form>
			{move || {
				error.get().map(|message| view! { <div class="network-error">{message}</div> })
			}}
			<EgoGraphCanvas data=snapshot />
		</div>
	}
}
