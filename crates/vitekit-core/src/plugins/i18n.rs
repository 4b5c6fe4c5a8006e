//! i18n plugin: i18next bootstrap module and a starter locale

use crate::deps;
use crate::error::ScaffoldError;
use crate::features::FeatureFlags;
use crate::plugins::{GeneratedFile, Plugin, PluginContext};

const I18N_INDEX: &str = "import i18n from 'i18next';
import { initReactI18next } from 'react-i18next';
import en from './locales/en.json';

i18n.use(initReactI18next).init({
  resources: {
    en: { translation: en },
  },
  lng: 'en',
  fallbackLng: 'en',
  interpolation: {
    escapeValue: false,
  },
});

export default i18n;
";

const EN_LOCALE: &str = "{
  \"app\": {
    \"title\": \"React + Vite\",
    \"edit\": \"Edit src/App.tsx and save to see changes\"
  }
}
";

pub struct I18nPlugin;

impl Plugin for I18nPlugin {
    fn id(&self) -> &'static str {
        "i18n"
    }

    fn name(&self) -> &'static str {
        "i18n"
    }

    fn description(&self) -> &'static str {
        "Internationalization with i18next"
    }

    fn order(&self) -> u32 {
        15
    }

    fn should_activate(&self, features: &FeatureFlags) -> bool {
        features.i18n
    }

    fn files(&self, _ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        Ok(vec![
            GeneratedFile::new("src/i18n/index.ts", I18N_INDEX),
            GeneratedFile::new("src/i18n/locales/en.json", EN_LOCALE),
        ])
    }

    fn dependencies(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        deps::versions_of(deps::I18N_DEPENDENCIES)
    }
}
