use std::cmp::Ordering;
use std::env;
use std::process::Command;

// Register tiers the kernels can be compiled for
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    // every rustc target feature the tier needs
    target_features: &'static [&'static str],
    cfg_flag: &'static str,
    enabled: bool,
    detected: bool,
}

impl CpuFeature {
    // Lowest number == Highest Priority
    fn priority(&self) -> usize {
        match self.name {
            "avx512" => 0,
            "avx2" => 1,
            "sse4_2" => 2,
            _ => usize::MAX,
        }
    }

    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse4_2",
                target_features: &["ssse3", "sse4.1", "sse4.2"],
                cfg_flag: "sse",
                enabled: false,
                detected: false,
            },
            CpuFeature {
                name: "avx2",
                target_features: &["avx", "avx2"],
                cfg_flag: "avx2",
                enabled: false,
                detected: false,
            },
            CpuFeature {
                name: "avx512",
                target_features: &["avx512f", "avx512bw"],
                cfg_flag: "avx512",
                enabled: false,
                detected: false,
            },
        ]
    }

    // Names used by /proc/cpuinfo for the same extensions
    fn cpuinfo_flags(&self) -> &'static [&'static str] {
        match self.name {
            "sse4_2" => &["ssse3", "sse4_1", "sse4_2"],
            "avx2" => &["avx", "avx2"],
            "avx512" => &["avx512f", "avx512bw"],
            _ => &[],
        }
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let flags: Vec<&str> = cpuinfo
                .lines()
                .find(|line| line.starts_with("flags"))
                .map(|line| line.split_whitespace().collect())
                .unwrap_or_default();

            for feature in features.iter_mut() {
                feature.detected = feature
                    .cpuinfo_flags()
                    .iter()
                    .all(|flag| flags.contains(flag));
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                feature.detected = match feature.name {
                    "avx512" => {
                        contents.contains("hw.optional.avx512f: 1")
                            && contents.contains("hw.optional.avx512bw: 1")
                    }
                    "avx2" => contents.contains("hw.optional.avx2_0: 1"),
                    "sse4_2" => contents.contains("hw.optional.sse4_2: 1"),
                    _ => false,
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn compiler_channel() -> String {
        let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
        let version_info = Command::new(rustc)
            .args(["--version", "--verbose"])
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).into_owned())
            .unwrap_or_default();

        if version_info.contains("nightly") {
            "nightly".to_string()
        } else {
            "stable".to_string()
        }
    }

    // What rustc will actually compile for, after RUSTFLAGS and target-cpu
    fn enabled_target_features(features: &mut [CpuFeature]) {
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
        let enabled: Vec<&str> = enabled.split(',').collect();

        for feature in features.iter_mut() {
            feature.enabled = feature
                .target_features
                .iter()
                .all(|name| enabled.contains(name));
        }
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        for detector in Self::cpu_features_detectors() {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    fn apply(features: &mut [CpuFeature]) {
        features.sort();

        let best_enabled = features.iter().find(|feature| feature.enabled);
        let best_detected = features.iter().find(|feature| feature.detected);

        if let Some(detected) = best_detected {
            let unused = best_enabled.is_none_or(|enabled| detected < enabled);
            if unused {
                println!(
                    "cargo:warning=host supports {} but it is not enabled; \
                     build with RUSTFLAGS=\"-C target-cpu=native\" to use it",
                    detected.name
                );
            }
        }

        // Tiers are cumulative: an avx512 build also gets the 128 and 256-bit kernels
        for feature in features.iter().filter(|feature| feature.enabled) {
            println!("cargo:rustc-cfg={}", feature.cfg_flag);
        }

        println!("cargo::rustc-check-cfg=cfg(avx512)");
        println!("cargo::rustc-check-cfg=cfg(avx2)");
        println!("cargo::rustc-check-cfg=cfg(sse)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTFLAGS");
    println!("cargo:rerun-if-env-changed=CARGO_ENCODED_RUSTFLAGS");

    // Gates the core::simd builtin shuffle
    let rustc_channel = PlatformDetector::compiler_channel();
    println!("cargo:rustc-cfg=rustc_channel=\"{rustc_channel}\"");
    println!("cargo::rustc-check-cfg=cfg(rustc_channel, values(\"nightly\", \"stable\"))");

    let mut features = CpuFeature::features();

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    if arch == "x86" || arch == "x86_64" {
        PlatformDetector::enabled_target_features(&mut features);

        let host = env::var("HOST").unwrap_or_default();
        let target = env::var("TARGET").unwrap_or_default();

        // Host detection only makes sense for native builds
        if host == target {
            PlatformDetector::detect_cpu_features(&mut features);
        }
    }

    PlatformDetector::apply(&mut features);
}
