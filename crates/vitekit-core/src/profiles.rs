//! Test profile presets: which categories of generated tests ship with a
//! project and what coverage bar the generated vitest config enforces

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered family of testing presets. The ordering is meaningful: each tier
/// includes at least the test categories of every lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestProfile {
    Bare,
    Minimum,
    Standard,
    Advanced,
    Complete,
}

impl TestProfile {
    pub const ALL: [TestProfile; 5] = [
        TestProfile::Bare,
        TestProfile::Minimum,
        TestProfile::Standard,
        TestProfile::Advanced,
        TestProfile::Complete,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bare" => Some(TestProfile::Bare),
            "minimum" => Some(TestProfile::Minimum),
            "standard" => Some(TestProfile::Standard),
            "advanced" => Some(TestProfile::Advanced),
            "complete" => Some(TestProfile::Complete),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            TestProfile::Bare => "bare",
            TestProfile::Minimum => "minimum",
            TestProfile::Standard => "standard",
            TestProfile::Advanced => "advanced",
            TestProfile::Complete => "complete",
        }
    }

    pub fn config(&self) -> &'static TestProfileConfig {
        match self {
            TestProfile::Bare => &BARE,
            TestProfile::Minimum => &MINIMUM,
            TestProfile::Standard => &STANDARD,
            TestProfile::Advanced => &ADVANCED,
            TestProfile::Complete => &COMPLETE,
        }
    }
}

impl Default for TestProfile {
    fn default() -> Self {
        TestProfile::Standard
    }
}

impl fmt::Display for TestProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Which categories of generated tests a profile includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IncludedTests {
    pub unit: bool,
    pub integration: bool,
    pub a11y: bool,
    pub performance: bool,
    pub snapshot: bool,
}

/// Full configuration for one test profile tier
#[derive(Debug, Clone)]
pub struct TestProfileConfig {
    pub name: &'static str,
    pub description: &'static str,
    /// Percentage enforced by the generated coverage config; 0 disables it
    pub coverage_threshold: u32,
    pub include_tests: IncludedTests,
    /// Package names pulled in for this tier; versions are resolved through
    /// the dependency table, and names missing there are skipped
    pub dependencies: &'static [&'static str],
}

static BARE: TestProfileConfig = TestProfileConfig {
    name: "Bare",
    description: "Basic Vitest setup without tests",
    coverage_threshold: 0,
    include_tests: IncludedTests {
        unit: false,
        integration: false,
        a11y: false,
        performance: false,
        snapshot: false,
    },
    dependencies: &[
        "vitest",
        "jsdom",
        "@testing-library/react",
        "@testing-library/jest-dom",
    ],
};

static MINIMUM: TestProfileConfig = TestProfileConfig {
    name: "Minimum",
    description: "Basic unit tests with 50% coverage",
    coverage_threshold: 50,
    include_tests: IncludedTests {
        unit: true,
        integration: false,
        a11y: false,
        performance: false,
        snapshot: true,
    },
    dependencies: &[
        "vitest",
        "jsdom",
        "@testing-library/react",
        "@testing-library/jest-dom",
        "@vitest/coverage-v8",
    ],
};

static STANDARD: TestProfileConfig = TestProfileConfig {
    name: "Standard",
    description: "Unit and integration tests with 70% coverage",
    coverage_threshold: 70,
    include_tests: IncludedTests {
        unit: true,
        integration: true,
        a11y: false,
        performance: false,
        snapshot: true,
    },
    dependencies: &[
        "vitest",
        "jsdom",
        "@testing-library/react",
        "@testing-library/jest-dom",
        "@testing-library/user-event",
        "@vitest/coverage-v8",
    ],
};

static ADVANCED: TestProfileConfig = TestProfileConfig {
    name: "Advanced",
    description: "Complete tests with accessibility and 80% coverage",
    coverage_threshold: 80,
    include_tests: IncludedTests {
        unit: true,
        integration: true,
        a11y: true,
        performance: false,
        snapshot: true,
    },
    dependencies: &[
        "vitest",
        "jsdom",
        "@testing-library/react",
        "@testing-library/jest-dom",
        "@testing-library/user-event",
        "@vitest/coverage-v8",
        "@vitest/ui",
        "jest-axe",
        "@types/jest-axe",
    ],
};

static COMPLETE: TestProfileConfig = TestProfileConfig {
    name: "Complete",
    description: "All test types with 90%+ coverage",
    coverage_threshold: 90,
    include_tests: IncludedTests {
        unit: true,
        integration: true,
        a11y: true,
        performance: true,
        snapshot: true,
    },
    dependencies: &[
        "vitest",
        "jsdom",
        "@testing-library/react",
        "@testing-library/jest-dom",
        "@testing-library/user-event",
        "@vitest/coverage-v8",
        "@vitest/ui",
        "jest-axe",
        "@types/jest-axe",
    ],
};

impl IncludedTests {
    /// True when every category enabled in `other` is also enabled here
    pub fn is_superset_of(&self, other: &IncludedTests) -> bool {
        (self.unit || !other.unit)
            && (self.integration || !other.integration)
            && (self.a11y || !other.a11y)
            && (self.performance || !other.performance)
            && (self.snapshot || !other.snapshot)
    }
}
