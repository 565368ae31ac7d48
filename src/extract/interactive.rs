//! Prototype reactions mapped to handlers, transitions and a linear flow.

use crate::scene::{Reaction, SceneNode, Transition};
use crate::types::{ClickHandler, FlowConnection, Interactions, PrototypeFlow, TransitionSpec};

const DEFAULT_TRANSITION: &str = "fade";
const DEFAULT_DURATION_MS: f64 = 200.0;
const DEFAULT_EASING: &str = "ease";

/// `None` when the node has no reactions.
pub fn extract_interactions(node: &SceneNode) -> Option<Interactions> {
    let first = node.reactions.first()?;

    let click_handlers = node.reactions.iter().map(click_handler).collect();
    let transitions: Vec<TransitionSpec> = node
        .reactions
        .iter()
        .map(|r| transition_spec(r.action.as_ref().and_then(|a| a.transition.as_ref())))
        .collect();

    // Aggregates come from the first reaction only.
    let lead = transition_spec(first.action.as_ref().and_then(|a| a.transition.as_ref()));

    Some(Interactions {
        click_handlers,
        transitions,
        animation_type: lead.kind,
        easing: lead.easing,
        timing: lead.duration_ms,
        flow: prototype_flow(node),
    })
}

/// DOM-style event name for a host trigger type.
pub fn event_name(trigger: &str) -> String {
    match trigger {
        "ON_CLICK" => "click".to_string(),
        "ON_HOVER" => "hover".to_string(),
        "ON_PRESS" => "press".to_string(),
        "ON_DRAG" => "drag".to_string(),
        "MOUSE_ENTER" => "mouseenter".to_string(),
        "MOUSE_LEAVE" => "mouseleave".to_string(),
        "MOUSE_UP" => "mouseup".to_string(),
        "MOUSE_DOWN" => "mousedown".to_string(),
        "AFTER_TIMEOUT" => "timeout".to_string(),
        "ON_KEY_DOWN" | "KEY_DOWN" => "keydown".to_string(),
        other => other.to_ascii_lowercase(),
    }
}

fn easing_name(easing: &str) -> String {
    match easing {
        "EASE_IN" => "ease-in".to_string(),
        "EASE_OUT" => "ease-out".to_string(),
        "EASE_IN_AND_OUT" | "EASE_IN_OUT" => "ease-in-out".to_string(),
        "LINEAR" => "linear".to_string(),
        other => other.to_ascii_lowercase().replace('_', "-"),
    }
}

fn click_handler(reaction: &Reaction) -> ClickHandler {
    let action = reaction.action.as_ref();
    ClickHandler {
        event: event_name(&reaction.trigger),
        trigger: reaction.trigger.clone(),
        action: action.map(|a| a.kind.clone()),
        target: action.and_then(|a| a.destination_id.clone()),
        navigation: action.and_then(|a| a.navigation.clone()),
        url: action.and_then(|a| a.url.clone()),
    }
}

fn transition_spec(transition: Option<&Transition>) -> TransitionSpec {
    TransitionSpec {
        kind: transition
            .map(|t| t.kind.to_ascii_lowercase().replace('_', "-"))
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| DEFAULT_TRANSITION.to_string()),
        duration_ms: transition
            .and_then(|t| t.duration)
            .map(|seconds| seconds * 1000.0)
            .unwrap_or(DEFAULT_DURATION_MS),
        easing: transition
            .and_then(|t| t.easing.as_deref())
            .map(easing_name)
            .unwrap_or_else(|| DEFAULT_EASING.to_string()),
    }
}

fn prototype_flow(node: &SceneNode) -> PrototypeFlow {
    let destination = |r: &Reaction| r.action.as_ref().and_then(|a| a.destination_id.clone());

    let mut screens: Vec<String> = Vec::new();
    for target in node.reactions.iter().filter_map(destination) {
        if !target.is_empty() && !screens.contains(&target) {
            screens.push(target);
        }
    }

    PrototypeFlow {
        start: node.id.clone(),
        end: node.reactions.first().and_then(destination),
        connections: node
            .reactions
            .iter()
            .map(|r| FlowConnection {
                from: node.id.clone(),
                to: destination(r),
                trigger: event_name(&r.trigger),
            })
            .collect(),
        screens,
    }
}
