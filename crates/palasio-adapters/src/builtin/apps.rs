//! The Hono API server and the Next.js client.

use palasio_core::domain::{TemplateCatalogBuilder, TemplateGroup};

pub(super) fn register(builder: TemplateCatalogBuilder) -> TemplateCatalogBuilder {
    builder
        .group(TemplateGroup::Apps)
        .literal("apps/api/package.json", API_PACKAGE_JSON)
        .literal("apps/api/tsconfig.json", API_TSCONFIG)
        .literal("apps/api/eslint.config.js", API_ESLINT)
        .literal("apps/api/src/index.ts", API_INDEX)
        .literal("apps/client/package.json", CLIENT_PACKAGE_JSON)
        .literal("apps/client/tsconfig.json", CLIENT_TSCONFIG)
        .literal("apps/client/next.config.ts", CLIENT_NEXT_CONFIG)
        .literal("apps/client/eslint.config.mjs", CLIENT_ESLINT)
        .parameterized("apps/client/app/layout.tsx", CLIENT_LAYOUT)
        .parameterized("apps/client/app/page.tsx", CLIENT_PAGE)
}

// ── apps/api ──────────────────────────────────────────────────────────────

const API_PACKAGE_JSON: &str = r#"{
  "name": "api",
  "module": "index.ts",
  "type": "module",
  "scripts": {
    "dev": "bun run --watch src/index.ts",
    "build": "bun build ./src/index.ts --outdir ./dist --target bun",
    "start": "bun run dist/index.js",
    "lint": "eslint src --cache --cache-location .eslintcache",
    "format": "prettier --write .",
    "format:check": "prettier --check .",
    "clean": "rimraf node_modules dist .eslintcache",
    "type-check": "tsc --noEmit"
  },
  "devDependencies": {
    "@repo/eslint-config": "workspace:*",
    "@repo/prettier-config": "workspace:*",
    "@repo/typescript-config": "workspace:*",
    "@types/bun": "latest",
    "prettier": "^3.6.2",
    "rimraf": "^6.0.1"
  },
  "prettier": "@repo/prettier-config",
  "dependencies": {
    "@hono/zod-validator": "^0.7.2",
    "@repo/shared": "workspace:*",
    "hono": "^4.9.4",
    "zod": "^4.0.17"
  }
}"#;

const API_TSCONFIG: &str = r#"{
  "extends": "@repo/typescript-config/node",
  "compilerOptions": {
    "outDir": "dist",
    "rootDir": "src",
    "types": ["bun-types"],
    "lib": ["ES2022"],
    "module": "ES2022",
    "target": "ES2022",
    "moduleResolution": "Bundler",
    "allowImportingTsExtensions": true,
    "noEmit": true
  },
  "include": ["src/**/*"],
  "exclude": ["node_modules", "dist"]
}"#;

const API_ESLINT: &str = r#"import { config as baseConfig } from '@repo/eslint-config/base';

export default [
  ...baseConfig,
  {
    languageOptions: {
      parserOptions: {
        project: true,
        tsconfigRootDir: import.meta.dirname,
      },
    },
  },
];"#;

const API_INDEX: &str = r#"import { Hono } from 'hono';
import { cors } from 'hono/cors';

const app = new Hono();

// Middleware
app.use('/*', cors());

// Routes
app.get('/', (c) => {
  return c.json({ 
    message: 'Welcome to the API',
    status: 'healthy'
  });
});

app.get('/health', (c) => {
  return c.json({ status: 'ok' });
});

const port = process.env.PORT || 3001;
console.log(`🚀 Server running on http://localhost:${port}`);

export default {
  port,
  fetch: app.fetch,
};"#;

// ── apps/client ───────────────────────────────────────────────────────────

const CLIENT_PACKAGE_JSON: &str = r#"{
  "name": "client",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start",
    "lint": "eslint"
  },
  "dependencies": {
    "next": "16.0.5",
    "react": "catalog:",
    "react-dom": "catalog:"
  },
  "devDependencies": {
    "@repo/eslint-config": "workspace:*",
    "@repo/typescript-config": "workspace:*",
    "@repo/prettier-config": "workspace:*",
    "@types/node": "catalog:",
    "@types/react": "catalog:",
    "@types/react-dom": "catalog:"
  }
}"#;

const CLIENT_TSCONFIG: &str = r#"{
  "extends": "@repo/typescript-config/next",
  "compilerOptions": {
    "plugins": [
      {
        "name": "next"
      }
    ],
    "baseUrl": ".",
    "paths": {
      "@/*": ["./*"]
    }
  },
  "include": [
    "next-env.d.ts",
    "**/*.ts",
    "**/*.tsx",
    ".next/types/**/*.ts"
  ],
  "exclude": [
    "node_modules"
  ]
}"#;

const CLIENT_NEXT_CONFIG: &str = r#"import type { NextConfig } from 'next';

const nextConfig: NextConfig = {
  /* config options here */
};

export default nextConfig;"#;

const CLIENT_ESLINT: &str = r#"import { config as nextConfig } from '@repo/eslint-config/next';

export default [
  ...nextConfig,
  {
    languageOptions: {
      parserOptions: {
        project: true,
        tsconfigRootDir: import.meta.dirname,
      },
    },
  },
];"#;

const CLIENT_LAYOUT: &str = r#"import type { Metadata } from 'next';

export const metadata: Metadata = {
  title: '{{PROJECT_NAME}}',
  description: 'A modern Bun-based monorepo application',
};

export default function RootLayout({
  children,
}: Readonly<{
  children: React.ReactNode;
}>) {
  return (
    <html lang='en'>
      <body>{children}</body>
    </html>
  );
}"#;

const CLIENT_PAGE: &str = r#"export default function Home() {
  return (
    <main style={{ padding: '2rem', fontFamily: 'sans-serif' }}>
      <h1>Welcome to {{PROJECT_NAME}}</h1>
      <p>Your monorepo is ready to go! 🚀</p>
      
      <div style={{ marginTop: '2rem' }}>
        <h2>Directory Structure:</h2>
        <ul>
          <li><strong>apps/api</strong> - Hono API server</li>
          <li><strong>apps/client</strong> - Next.js application</li>
          <li><strong>packages/auth</strong> - Authentication utilities</li>
          <li><strong>packages/database</strong> - Database setup</li>
          <li><strong>packages/shared</strong> - Shared utilities</li>
          <li><strong>packages/web-ui</strong> - UI component library</li>
        </ul>
      </div>

      <div style={{ marginTop: '2rem' }}>
        <h2>Next Steps:</h2>
        <ol>
          <li>Run <code>bun install</code> to install dependencies</li>
          <li>Run <code>bun run dev</code> to start development servers</li>
          <li>Start building your application!</li>
        </ol>
      </div>
    </main>
  );
}"#;
