//! The default diagnostic dependency set.

use provide_core::deps::DependencySpec;

/// Dependencies reported by the `check-deps` command.
pub fn default_registry() -> Vec<DependencySpec> {
    vec![
        DependencySpec::binary("git", "Version control, used for source-based workflows")
            .require()
            .with_hint("apt install git"),
        DependencySpec::binary("pkg-config", "Locates system libraries at build time")
            .require()
            .with_hint("apt install pkg-config"),
        DependencySpec::binary("curl", "HTTP transfers in helper scripts")
            .with_hint("apt install curl"),
        DependencySpec::binary("make", "Build orchestration")
            .with_hint("apt install build-essential"),
        DependencySpec::binary("cmake", "Native build configuration")
            .with_hint("apt install cmake"),
        DependencySpec::binary("docker", "Container runtime for sandboxed tasks")
            .with_hint("https://docs.docker.com/engine/install/"),
        DependencySpec::library("libssl", "TLS support for native builds", "openssl")
            .with_hint("apt install libssl-dev"),
    ]
}
