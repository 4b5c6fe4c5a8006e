//! Redux Toolkit plugin: typed hooks and the store packages.
//!
//! The store bootstrap itself (`store.ts`, `appSlice.ts`) is written with
//! the other source stubs during the copying-files step; this plugin owns
//! the typed-hooks module and the dependency contributions.

use crate::deps;
use crate::error::ScaffoldError;
use crate::features::FeatureFlags;
use crate::plugins::{GeneratedFile, Plugin, PluginContext};

const TYPED_HOOKS: &str = "import { useDispatch, useSelector, type TypedUseSelectorHook } from 'react-redux';
import type { RootState, AppDispatch } from './store';

// Typed hooks for use throughout the app
export const useAppDispatch: () => AppDispatch = useDispatch;
export const useAppSelector: TypedUseSelectorHook<RootState> = useSelector;
";

pub struct ReduxPlugin;

impl Plugin for ReduxPlugin {
    fn id(&self) -> &'static str {
        "redux"
    }

    fn name(&self) -> &'static str {
        "Redux Toolkit"
    }

    fn description(&self) -> &'static str {
        "State management with Redux Toolkit"
    }

    fn order(&self) -> u32 {
        20
    }

    fn should_activate(&self, features: &FeatureFlags) -> bool {
        features.redux
    }

    fn files(&self, _ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        Ok(vec![GeneratedFile::new("src/store/hooks.ts", TYPED_HOOKS)])
    }

    fn dependencies(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        deps::versions_of(deps::REDUX_DEPENDENCIES)
    }
}
