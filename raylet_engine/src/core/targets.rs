use crate::tracing_targets;

tracing_targets! {
    OUTPUT = "output",
}
