//! Path search and itinerary planning for the Courier routing engine.
//!
//! [`DijkstraPathFinder`] implements the
//! [`PathFinder`](courier_core::PathFinder) trait with Dijkstra's algorithm
//! over an explicit [`MinHeap`]. [`MultiStopPlanner`] chains shortest paths
//! into an itinerary with the nearest-neighbour heuristic, using any
//! `PathFinder` for its legs. [`shortest_path`] and [`plan_route`] are the
//! free-function entry points using the Dijkstra engine.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod dijkstra;
mod heap;
mod multi_stop;

pub use dijkstra::{DijkstraPathFinder, shortest_path};
pub use heap::MinHeap;
pub use multi_stop::{MultiStopPlanner, plan_route};
