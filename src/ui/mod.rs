/// Presentation layer. Owns all rendering and widget wiring; the data layer
/// only ever sees a `FilterState` and hands back plain structured views.
pub mod charts;
pub mod panels;
pub mod table;
