use raylet_engine::tracing_targets;

tracing_targets! {
    MAIN = "main",
    RENDERER = "renderer",
}
