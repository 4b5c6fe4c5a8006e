//! Orchestrator-owned configuration files: HTML entry point, Vite config,
//! TypeScript configs, ignore file, and README

use indexmap::IndexMap;
use serde_json::{json, Value};

use crate::features::FeatureFlags;
use crate::project::ProjectConfig;

pub fn index_html(project_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/vite.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#,
        project_name
    )
}

/// Vite config assembled from structured import and plugin lists
pub fn vite_config(features: &FeatureFlags) -> String {
    let mut imports = vec![
        ("defineConfig", "vite", true),
        ("react", "@vitejs/plugin-react", false),
    ];
    let mut plugins = vec!["react()"];

    if features.tailwindcss {
        imports.push(("tailwindcss", "@tailwindcss/vite", false));
        plugins.insert(0, "tailwindcss()");
    }

    let mut out = String::new();
    for (symbol, module, named) in imports {
        if named {
            out.push_str(&format!("import {{ {} }} from '{}';\n", symbol, module));
        } else {
            out.push_str(&format!("import {} from '{}';\n", symbol, module));
        }
    }
    out.push_str("\n// https://vite.dev/config/\n");
    out.push_str("export default defineConfig({\n");
    out.push_str(&format!("  plugins: [{}],\n", plugins.join(", ")));
    out.push_str("});\n");
    out
}

/// The three TypeScript configs: a solution-style root referencing the app
/// and node variants
pub fn tsconfigs() -> Vec<(String, String)> {
    let root = json!({
        "files": [],
        "references": [
            { "path": "./tsconfig.app.json" },
            { "path": "./tsconfig.node.json" },
        ],
    });

    let app = json!({
        "compilerOptions": {
            "tsBuildInfoFile": "./node_modules/.tmp/tsconfig.app.tsbuildinfo",
            "target": "ES2020",
            "useDefineForClassFields": true,
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "skipLibCheck": true,
            "moduleResolution": "bundler",
            "allowImportingTsExtensions": true,
            "isolatedModules": true,
            "moduleDetection": "force",
            "noEmit": true,
            "jsx": "react-jsx",
            "strict": true,
            "noUnusedLocals": true,
            "noUnusedParameters": true,
            "noFallthroughCasesInSwitch": true,
            "noUncheckedSideEffectImports": true,
        },
        "include": ["src"],
    });

    let node = json!({
        "compilerOptions": {
            "tsBuildInfoFile": "./node_modules/.tmp/tsconfig.node.tsbuildinfo",
            "target": "ES2022",
            "lib": ["ES2023"],
            "module": "ESNext",
            "skipLibCheck": true,
            "moduleResolution": "bundler",
            "allowImportingTsExtensions": true,
            "isolatedModules": true,
            "moduleDetection": "force",
            "noEmit": true,
            "strict": true,
            "noUnusedLocals": true,
            "noUnusedParameters": true,
            "noFallthroughCasesInSwitch": true,
            "noUncheckedSideEffectImports": true,
        },
        "include": ["vite.config.ts"],
    });

    vec![
        ("tsconfig.json".to_string(), pretty(&root)),
        ("tsconfig.app.json".to_string(), pretty(&app)),
        ("tsconfig.node.json".to_string(), pretty(&node)),
    ]
}

fn pretty(value: &Value) -> String {
    let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
    out.push('\n');
    out
}

pub fn gitignore() -> &'static str {
    "# Dependencies
node_modules/

# Build outputs
dist/
dist-ssr/
*.local

# Logs
logs/
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*
lerna-debug.log*

# Editor directories
.vscode/*
!.vscode/extensions.json
!.vscode/settings.json
.idea/
*.suo
*.ntvs*
*.njsproj
*.sln
*.sw?

# OS files
.DS_Store
Thumbs.db

# Environment files
.env
.env.local
.env.*.local

# TypeScript cache
*.tsbuildinfo

# Testing
coverage/
"
}

/// Human-readable blurbs for the known scripts, used by the README
fn script_description(name: &str) -> Option<&'static str> {
    match name {
        "dev" => Some("Start development server"),
        "build" => Some("Build for production"),
        "preview" => Some("Preview production build"),
        "lint" => Some("Run ESLint"),
        "lint:fix" => Some("Fix ESLint errors"),
        "format" => Some("Format code with Prettier"),
        "format:check" => Some("Check formatting"),
        "test" => Some("Run tests once"),
        "test:watch" => Some("Run tests in watch mode"),
        "test:ui" => Some("Open the Vitest UI"),
        "test:coverage" => Some("Run tests with coverage"),
        "prepare" => Some("Install git hooks"),
        _ => None,
    }
}

/// README whose feature list and command list reflect the generated
/// project: commands use the chosen package manager's invocation style
pub fn readme(config: &ProjectConfig, scripts: &IndexMap<String, String>) -> String {
    let features = &config.features;
    let pm = config.package_manager;

    let mut feature_list = vec!["React 18", "Vite", "TypeScript"];
    if features.tailwindcss {
        feature_list.push("TailwindCSS");
    }
    if features.redux {
        feature_list.push("Redux Toolkit");
    }
    if features.react_router {
        feature_list.push("React Router");
    }
    if features.i18n {
        feature_list.push("i18next");
    }
    if features.eslint {
        feature_list.push("ESLint");
    }
    if features.prettier {
        feature_list.push("Prettier");
    }
    if features.testing {
        feature_list.push("Vitest");
    }

    let mut out = format!("# {}\n\n", config.name);
    if config.description.is_empty() {
        out.push_str("A modern React + Vite project.\n\n");
    } else {
        out.push_str(&format!("{}\n\n", config.description));
    }

    out.push_str("## Features\n\n");
    for feature in feature_list {
        out.push_str(&format!("- {}\n", feature));
    }

    out.push_str("\n## Getting Started\n\n```bash\n");
    out.push_str(&format!("# Install dependencies\n{}\n\n", pm.install_command()));
    out.push_str(&format!(
        "# Start development server\n{}\n\n",
        pm.run_script("dev")
    ));
    out.push_str(&format!(
        "# Build for production\n{}\n```\n",
        pm.run_script("build")
    ));

    out.push_str("\n## Scripts\n\n");
    for (name, _) in scripts {
        match script_description(name) {
            Some(blurb) => out.push_str(&format!("- `{}` - {}\n", name, blurb)),
            None => out.push_str(&format!("- `{}`\n", name)),
        }
    }

    out
}
