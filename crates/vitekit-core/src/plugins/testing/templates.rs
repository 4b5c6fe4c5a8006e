//! Embedded templates for the generated test suite, rendered through the
//! template engine against the feature/profile context.
//!
//! Block tags are glued to the surrounding content (no directive-only
//! lines) so that disabled branches leave no stray blank lines behind.

pub const VITEST_CONFIG: &str = "import { defineConfig } from 'vitest/config';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
  test: {
    environment: 'jsdom',
    globals: true,
    setupFiles: ['./src/__tests__/setup.ts'],
{{#if hasCoverage}}    coverage: {
      provider: 'v8',
      reporter: ['text', 'html', 'lcov'],
      thresholds: {
        lines: {{coverageThreshold}},
        functions: {{coverageThreshold}},
        branches: {{coverageThreshold}},
        statements: {{coverageThreshold}},
      },
    },
{{/if}}  },
});
";

pub const SETUP: &str = "import '@testing-library/jest-dom';
{{#if a11yIncluded}}import { expect } from 'vitest';
import * as axeMatchers from 'vitest-axe/matchers';

expect.extend(axeMatchers);
{{/if}}";

pub const TEST_UTILS: &str = "import type { ReactElement, ReactNode } from 'react';
import { render, type RenderOptions } from '@testing-library/react';
{{#if redux}}import { Provider } from 'react-redux';
import { store } from '../store/store';
{{/if}}{{#if reactRouter}}import { BrowserRouter } from 'react-router-dom';
{{/if}}{{#if i18n}}import '../i18n';
{{/if}}
function Providers({ children }: { children: ReactNode }) {
{{#if redux}}{{#if reactRouter}}  return (
    <Provider store={store}>
      <BrowserRouter>{children}</BrowserRouter>
    </Provider>
  );
{{else}}  return <Provider store={store}>{children}</Provider>;
{{/if}}{{else}}{{#if reactRouter}}  return <BrowserRouter>{children}</BrowserRouter>;
{{else}}  return <>{children}</>;
{{/if}}{{/if}}}

export function renderWithProviders(ui: ReactElement, options?: Omit<RenderOptions, 'wrapper'>) {
  return render(ui, { wrapper: Providers, ...options });
}

export * from '@testing-library/react';
";

pub const APP_TEST: &str = "import { describe, it, expect } from 'vitest';
import { screen } from '@testing-library/react';
import App from '../App';
import { renderWithProviders } from './test-utils';

describe('App', () => {
  it('renders the headline', () => {
    renderWithProviders(<App />);
    expect(screen.getByText('React + Vite')).toBeInTheDocument();
  });
{{#if snapshotIncluded}}
  it('matches the snapshot', () => {
    const { container } = renderWithProviders(<App />);
    expect(container).toMatchSnapshot();
  });
{{/if}}});
";

pub const STORE_TEST: &str = "import { describe, it, expect } from 'vitest';
import { store } from '../store/store';
import { setTheme, toggleTheme, selectTheme } from '../store/slices/appSlice';

describe('app slice', () => {
  it('starts with the dark theme', () => {
    expect(selectTheme(store.getState())).toBe('dark');
  });

  it('sets the theme explicitly', () => {
    store.dispatch(setTheme('light'));
    expect(selectTheme(store.getState())).toBe('light');
  });

  it('toggles the theme', () => {
    store.dispatch(setTheme('dark'));
    store.dispatch(toggleTheme());
    expect(selectTheme(store.getState())).toBe('light');
  });
});
";

pub const ROUTER_TEST: &str = "import { describe, it, expect } from 'vitest';
import { render, screen } from '@testing-library/react';
import { MemoryRouter } from 'react-router-dom';
import App from '../App';

describe('routing', () => {
  it('renders the app on the root route', () => {
    render(
      <MemoryRouter initialEntries={['/']}>
        <App />
      </MemoryRouter>
    );
    expect(screen.getByText('React + Vite')).toBeInTheDocument();
  });
});
";

pub const I18N_TEST: &str = "import { describe, it, expect } from 'vitest';
import i18n from '../i18n';

describe('i18n', () => {
  it('initializes with the english locale', () => {
    expect(i18n.language).toBe('en');
  });

  it('resolves translation keys', () => {
    expect(i18n.t('app.title')).toBe('React + Vite');
  });
});
";

pub const A11Y_TEST: &str = "import { describe, it, expect } from 'vitest';
import { axe } from 'vitest-axe';
import App from '../App';
import { renderWithProviders } from './test-utils';

describe('accessibility', () => {
  it('has no detectable a11y violations', async () => {
    const { container } = renderWithProviders(<App />);
    expect(await axe(container)).toHaveNoViolations();
  });
});
";

pub const PERFORMANCE_TEST: &str = "import { describe, it, expect } from 'vitest';
import App from '../App';
import { renderWithProviders } from './test-utils';

describe('performance', () => {
  it('renders within the frame budget', () => {
    const start = performance.now();
    renderWithProviders(<App />);
    const elapsed = performance.now() - start;
    expect(elapsed).toBeLessThan(200);
  });
});
";

pub const REDUX_INTEGRATION_TEST: &str = "import { describe, it, expect } from 'vitest';
import { configureStore } from '@reduxjs/toolkit';
import appReducer, { toggleTheme } from '../store/slices/appSlice';

describe('store integration', () => {
  it('wires the app reducer into a fresh store', () => {
    const store = configureStore({ reducer: { app: appReducer } });
    expect(store.getState().app.theme).toBe('dark');
    store.dispatch(toggleTheme());
    expect(store.getState().app.theme).toBe('light');
  });
});
";

pub const TAILWIND_TEST: &str = "import { describe, it, expect } from 'vitest';
import App from '../App';
import { renderWithProviders } from './test-utils';

describe('tailwind styling', () => {
  it('applies utility classes to the root container', () => {
    const { container } = renderWithProviders(<App />);
    const root = container.firstElementChild;
    expect(root?.className).toContain('min-h-screen');
  });
});
";
