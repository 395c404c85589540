mod plot;
mod scatter_chart;
mod summary;
mod timeseries_chart;
mod view;
mod whatif;

pub use view::Dashboard;
