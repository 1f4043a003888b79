use language_tour::diagnostics::init_tracing;
use language_tour::{run_tour, TourSettings};

fn main() {
    init_tracing();
    run_tour(&TourSettings::default());
}
