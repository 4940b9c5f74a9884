mod axis_render_frame_builder;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod layout_helpers;
mod render_frame_builder;
mod series_projection;
mod snapshot_controller;
mod tooltip_render_frame_builder;
mod tooltip_view;

pub use data_controller::LoadReportSummary;
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, ChartLabels, ChartStyle, LegendStyle, TooltipStyle};
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use tooltip_view::TooltipView;
