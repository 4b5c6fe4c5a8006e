//! Always-present source stubs written during the copying-files step:
//! entry point, root component, stylesheet, and the state-management
//! bootstrap when Redux is enabled. Built by direct string construction
//! parameterized on the feature flags.

use crate::features::FeatureFlags;
use crate::plugins::GeneratedFile;

/// Vite SVG logo placed in `public/`
pub const VITE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" aria-hidden="true" role="img" class="iconify iconify--logos" width="31.88" height="32" preserveAspectRatio="xMidYMid meet" viewBox="0 0 256 257"><defs><linearGradient id="IconifyId1813088fe1fbc01fb466" x1="-.828%" x2="57.636%" y1="7.652%" y2="78.411%"><stop offset="0%" stop-color="#41D1FF"></stop><stop offset="100%" stop-color="#BD34FE"></stop></linearGradient><linearGradient id="IconifyId1813088fe1fbc01fb467" x1="43.376%" x2="50.316%" y1="2.242%" y2="89.03%"><stop offset="0%" stop-color="#FFBD4F"></stop><stop offset="100%" stop-color="#FF980E"></stop></linearGradient></defs><path fill="url(#IconifyId1813088fe1fbc01fb466)" d="M255.153 37.938L134.897 252.976c-2.483 4.44-8.862 4.466-11.382.048L.875 37.958c-2.746-4.814 1.371-10.646 6.827-9.67l120.385 21.517a6.537 6.537 0 0 0 2.322-.004l117.867-21.483c5.438-.991 9.574 4.796 6.877 9.62Z"></path><path fill="url(#IconifyId1813088fe1fbc01fb467)" d="M185.432.063L96.44 17.501a3.268 3.268 0 0 0-2.634 3.014l-5.474 92.456a3.268 3.268 0 0 0 3.997 3.378l24.777-5.718c2.318-.535 4.413 1.507 3.936 3.838l-7.361 36.047c-.495 2.426 1.782 4.5 4.151 3.78l15.304-4.649c2.372-.72 4.652 1.36 4.15 3.788l-11.698 56.621c-.732 3.542 3.979 5.473 5.943 2.437l1.313-2.028l72.516-144.72c1.215-2.423-.88-5.186-3.54-4.672l-25.505 4.922c-2.396.462-4.435-1.77-3.759-4.114l16.646-57.705c.677-2.35-1.37-4.583-3.769-4.113Z"></path></svg>"##;

/// All source stubs for a feature set, as (path, content) pairs
pub fn source_files(features: &FeatureFlags) -> Vec<GeneratedFile> {
    let mut files = vec![
        GeneratedFile::new("src/main.tsx", main_tsx(features)),
        GeneratedFile::new("src/App.tsx", app_tsx(features)),
        GeneratedFile::new("src/App.css", app_css(features)),
        GeneratedFile::new("public/vite.svg", VITE_SVG),
    ];

    if features.redux {
        files.push(GeneratedFile::new("src/store/store.ts", redux_store()));
        files.push(GeneratedFile::new(
            "src/store/slices/appSlice.ts",
            redux_slice(),
        ));
    }

    files
}

/// Entry point with provider wrapping driven by the active features:
/// the Redux provider wraps the router, which wraps the app
pub fn main_tsx(features: &FeatureFlags) -> String {
    let mut imports = vec![
        "import { StrictMode } from 'react';".to_string(),
        "import { createRoot } from 'react-dom/client';".to_string(),
        "import App from './App';".to_string(),
        "import './App.css';".to_string(),
    ];

    if features.i18n {
        imports.push("import './i18n';".to_string());
    }
    if features.redux {
        imports.push("import { Provider } from 'react-redux';".to_string());
        imports.push("import { store } from './store/store';".to_string());
    }
    if features.react_router {
        imports.push("import { BrowserRouter } from 'react-router-dom';".to_string());
    }

    let mut app = "<App />".to_string();
    if features.react_router {
        app = format!("<BrowserRouter>\n        {}\n      </BrowserRouter>", app);
    }
    if features.redux {
        app = format!("<Provider store={{store}}>\n        {}\n      </Provider>", app);
    }

    format!(
        "{}\n\ncreateRoot(document.getElementById('root')!).render(\n  <StrictMode>\n    {}\n  </StrictMode>\n);\n",
        imports.join("\n"),
        app
    )
}

/// Root component; class names depend on whether Tailwind is active
pub fn app_tsx(features: &FeatureFlags) -> String {
    let root_attrs = if features.tailwindcss {
        " className=\"min-h-screen bg-gradient-to-br from-gray-900 to-gray-800 flex items-center justify-center\""
    } else {
        ""
    };
    let center_attrs = if features.tailwindcss {
        " className=\"text-center\""
    } else {
        ""
    };
    let title_attrs = if features.tailwindcss {
        " className=\"text-4xl font-bold text-white mb-4\""
    } else {
        ""
    };
    let desc_attrs = if features.tailwindcss {
        " className=\"text-gray-400\""
    } else {
        ""
    };

    format!(
        "function App() {{\n  return (\n    <div{root}>\n      <div{center}>\n        <h1{title}>\n          React + Vite\n        </h1>\n        <p{desc}>\n          Edit <code>src/App.tsx</code> and save to see changes\n        </p>\n      </div>\n    </div>\n  );\n}}\n\nexport default App;\n",
        root = root_attrs,
        center = center_attrs,
        title = title_attrs,
        desc = desc_attrs,
    )
}

pub fn app_css(features: &FeatureFlags) -> String {
    if features.tailwindcss {
        "@import 'tailwindcss';\n".to_string()
    } else {
        "#root {\n  max-width: 1280px;\n  margin: 0 auto;\n  padding: 2rem;\n  text-align: center;\n}\n"
            .to_string()
    }
}

fn redux_store() -> &'static str {
    "import { configureStore } from '@reduxjs/toolkit';
import appReducer from './slices/appSlice';

export const store = configureStore({
  reducer: {
    app: appReducer,
  },
});

export type RootState = ReturnType<typeof store.getState>;
export type AppDispatch = typeof store.dispatch;
"
}

fn redux_slice() -> &'static str {
    "import { createSlice, PayloadAction } from '@reduxjs/toolkit';
import type { RootState } from '../store';

interface AppState {
  theme: 'light' | 'dark';
}

const initialState: AppState = {
  theme: 'dark',
};

export const appSlice = createSlice({
  name: 'app',
  initialState,
  reducers: {
    setTheme: (state, action: PayloadAction<'light' | 'dark'>) => {
      state.theme = action.payload;
    },
    toggleTheme: (state) => {
      state.theme = state.theme === 'dark' ? 'light' : 'dark';
    },
  },
});

export const { setTheme, toggleTheme } = appSlice.actions;
export const selectTheme = (state: RootState) => state.app.theme;
export default appSlice.reducer;
"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_main_has_no_providers() {
        let content = main_tsx(&FeatureFlags::default());
        assert!(content.contains("<App />"));
        assert!(!content.contains("Provider"));
        assert!(!content.contains("BrowserRouter"));
        assert!(!content.contains("./i18n"));
    }

    #[test]
    fn test_provider_nesting_redux_outside_router() {
        let features = FeatureFlags {
            redux: true,
            react_router: true,
            ..FeatureFlags::default()
        };
        let content = main_tsx(&features);
        let provider_at = content.find("<Provider store={store}>").unwrap();
        let router_at = content.find("<BrowserRouter>").unwrap();
        let app_at = content.find("<App />").unwrap();
        assert!(provider_at < router_at);
        assert!(router_at < app_at);
    }

    #[test]
    fn test_i18n_bootstrap_imported_before_providers() {
        let features = FeatureFlags {
            i18n: true,
            redux: true,
            ..FeatureFlags::default()
        };
        let content = main_tsx(&features);
        let i18n_at = content.find("import './i18n';").unwrap();
        let redux_at = content.find("import { Provider }").unwrap();
        assert!(i18n_at < redux_at);
    }

    #[test]
    fn test_app_styles_follow_tailwind_flag() {
        let plain = app_tsx(&FeatureFlags::default());
        assert!(!plain.contains("className"));

        let tailwind = app_tsx(&FeatureFlags {
            tailwindcss: true,
            ..FeatureFlags::default()
        });
        assert!(tailwind.contains("min-h-screen"));
    }

    #[test]
    fn test_css_variants() {
        assert!(app_css(&FeatureFlags {
            tailwindcss: true,
            ..FeatureFlags::default()
        })
        .starts_with("@import 'tailwindcss';"));
        assert!(app_css(&FeatureFlags::default()).contains("#root"));
    }

    #[test]
    fn test_redux_bootstrap_included_when_enabled() {
        let minimal = source_files(&FeatureFlags::default());
        assert!(!minimal.iter().any(|f| f.path.starts_with("src/store/")));

        let with_redux = source_files(&FeatureFlags {
            redux: true,
            ..FeatureFlags::default()
        });
        let paths: Vec<&str> = with_redux.iter().map(|f| f.path.as_str()).collect();
        assert!(paths.contains(&"src/store/store.ts"));
        assert!(paths.contains(&"src/store/slices/appSlice.ts"));
    }
}
