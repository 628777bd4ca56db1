//! Patrolling Guard
//!
//! This demo drives a small character AI built as a hierarchical state graph.
//!
//! Key concepts:
//! - Nested states (Patrol contains Walk and Look around)
//! - Trigger-button conditions raised by game events
//! - Predicate conditions that settle as soon as they are armed
//! - Inspecting the active path
//!
//! Run with: cargo run --example patrol_guard

use stategraph::prototype::{FnCondition, PrototypeCondition, PrototypeState};
use stategraph::{ComposerError, StateGraphComposer};
use std::cell::Cell;
use std::rc::Rc;

fn state(name: &'static str) -> Rc<PrototypeState> {
    Rc::new(
        PrototypeState::named(name)
            .on_enter(move || println!("  enter {name}"))
            .on_exit(move || println!("  exit  {name}")),
    )
}

fn main() -> Result<(), ComposerError> {
    println!("=== Patrolling Guard ===\n");

    let health = Rc::new(Cell::new(100));

    let root = StateGraphComposer::empty();
    let patrol = StateGraphComposer::with_state(state("Patrol"));
    let walk = StateGraphComposer::with_state(state("Walk"));
    let look = StateGraphComposer::with_state(state("Look around"));
    let combat = StateGraphComposer::with_state(state("Combat"));
    let flee = StateGraphComposer::with_state(state("Flee"));

    patrol.add_node(&walk)?;
    patrol.add_node(&look)?;
    root.add_node(&patrol)?;
    root.add_node(&combat)?;
    root.add_node(&flee)?;

    let waypoint_reached = Rc::new(PrototypeCondition::named("waypoint reached"));
    let enemy_spotted = Rc::new(PrototypeCondition::named("enemy spotted"));
    let low_health = {
        let health = health.clone();
        Rc::new(FnCondition::new(move || health.get() < 30).with_label("low health"))
    };

    patrol.add_link(&walk, &look, waypoint_reached.clone())?;
    root.add_link(&patrol, &combat, enemy_spotted.clone())?;
    root.add_link(&combat, &flee, low_health.clone())?;

    println!("Composed paths:");
    for path in root.paths() {
        println!("  {}", path?);
    }
    println!();

    let graph = root.build_validated()?;

    println!("Guard wakes up:");
    graph.enter();
    println!("  active: {}\n", graph.active_path());

    println!("Waypoint reached:");
    waypoint_reached.trigger();
    println!("  active: {}\n", graph.active_path());

    println!("Enemy spotted:");
    enemy_spotted.trigger();
    println!("  active: {}\n", graph.active_path());

    println!("Guard takes a hit:");
    health.set(20);
    low_health.notify();
    println!("  active: {}\n", graph.active_path());

    println!("Guard goes to sleep:");
    graph.exit();

    println!("\n=== Demo Complete ===");
    Ok(())
}
