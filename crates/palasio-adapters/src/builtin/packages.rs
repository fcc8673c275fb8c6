//! Shared libraries: auth, database, shared, web-ui.

use palasio_core::domain::{TemplateCatalogBuilder, TemplateGroup};

pub(super) fn register(builder: TemplateCatalogBuilder) -> TemplateCatalogBuilder {
    builder
        .group(TemplateGroup::Packages)
        .literal("packages/auth/package.json", AUTH_PACKAGE_JSON)
        .literal("packages/auth/tsconfig.json", AUTH_TSCONFIG)
        .literal("packages/auth/src/index.ts", AUTH_INDEX)
        .literal("packages/database/package.json", DATABASE_PACKAGE_JSON)
        .literal("packages/database/tsconfig.json", DATABASE_TSCONFIG)
        .literal("packages/database/src/index.ts", DATABASE_INDEX)
        .literal("packages/database/src/schema/index.ts", DATABASE_SCHEMA)
        .literal("packages/shared/package.json", SHARED_PACKAGE_JSON)
        .literal("packages/shared/tsconfig.json", SHARED_TSCONFIG)
        .literal("packages/shared/src/index.ts", SHARED_INDEX)
        .literal("packages/shared/src/utils/index.ts", SHARED_UTILS)
        .literal("packages/shared/src/types/index.ts", SHARED_TYPES)
        .literal("packages/web-ui/package.json", WEB_UI_PACKAGE_JSON)
        .literal("packages/web-ui/tsconfig.json", WEB_UI_TSCONFIG)
        .literal("packages/web-ui/src/index.ts", WEB_UI_INDEX)
        .literal("packages/web-ui/src/components/button.tsx", WEB_UI_BUTTON)
}

// ── packages/auth ─────────────────────────────────────────────────────────

const AUTH_PACKAGE_JSON: &str = r#"{
  "name": "@repo/auth",
  "version": "0.0.1",
  "type": "module",
  "private": true,
  "scripts": {
    "build": "tsc",
    "lint": "eslint . --cache --cache-location .eslintcache",
    "format": "prettier --write .",
    "format:check": "prettier --check .",
    "clean": "rimraf node_modules dist",
    "type-check": "tsc --noEmit"
  },
  "devDependencies": {
    "@repo/eslint-config": "workspace:*",
    "@repo/prettier-config": "workspace:*",
    "@repo/typescript-config": "workspace:*",
    "prettier": "catalog:",
    "rimraf": "^6.0.1",
    "typescript": "catalog:"
  },
  "prettier": "@repo/prettier-config",
  "dependencies": {
    "@repo/shared": "workspace:*"
  },
  "exports": {
    ".": "./src/index.ts"
  }
}"#;

const AUTH_TSCONFIG: &str = r#"{
  "extends": "@repo/typescript-config/base",
  "compilerOptions": {
    "outDir": "dist",
    "rootDir": "src"
  },
  "include": ["src"],
  "exclude": ["node_modules", "dist"]
}"#;

const AUTH_INDEX: &str = r#"export function authenticate(token: string): boolean {
  // TODO: Implement authentication logic
  return token.length > 0;
}

export function authorize(userId: string, resource: string): boolean {
  // TODO: Implement authorization logic
  return userId !== '' && resource !== '';
}"#;

// ── packages/database ─────────────────────────────────────────────────────

const DATABASE_PACKAGE_JSON: &str = r#"{
  "name": "@repo/database",
  "version": "0.0.0",
  "type": "module",
  "private": true,
  "scripts": {
    "build": "tsc",
    "lint": "eslint . --cache --cache-location .eslintcache",
    "lint:fix": "eslint . --fix",
    "format": "prettier --write .",
    "format:check": "prettier --check .",
    "clean": "rimraf node_modules dist",
    "type-check": "tsc --noEmit"
  },
  "devDependencies": {
    "@repo/eslint-config": "workspace:*",
    "@repo/prettier-config": "workspace:*",
    "@repo/typescript-config": "workspace:*",
    "@types/node": "^22.15.3",
    "prettier": "catalog:",
    "rimraf": "^6.0.1",
    "typescript": "catalog:"
  },
  "prettier": "@repo/prettier-config",
  "dependencies": {
    "@repo/shared": "workspace:*"
  },
  "exports": {
    "./*": "./src/*/index.ts",
    ".": "./src/index.ts"
  }
}"#;

const DATABASE_TSCONFIG: &str = r#"{
  "extends": "@repo/typescript-config/base",
  "compilerOptions": {
    "outDir": "dist",
    "rootDir": "src"
  },
  "include": ["src"],
  "exclude": ["node_modules", "dist"]
}"#;

const DATABASE_INDEX: &str = r#"// Database connection and schema exports
export const db = {
  connect: async () => {
    // TODO: Implement database connection
    console.log('Database connected');
  },
  disconnect: async () => {
    // TODO: Implement database disconnection
    console.log('Database disconnected');
  },
};

export * from './schema';"#;

const DATABASE_SCHEMA: &str = r#"// Define your database schemas here
export interface User {
  id: string;
  email: string;
  name: string;
  createdAt: Date;
}

// Add more schema types as needed"#;

// ── packages/shared ───────────────────────────────────────────────────────

const SHARED_PACKAGE_JSON: &str = r#"{
  "name": "@repo/shared",
  "version": "0.0.1",
  "type": "module",
  "private": true,
  "scripts": {
    "build": "tsc",
    "lint": "eslint . --cache --cache-location .eslintcache",
    "format": "prettier --write .",
    "format:check": "prettier --check .",
    "clean": "rimraf node_modules dist",
    "type-check": "tsc --noEmit"
  },
  "devDependencies": {
    "@repo/eslint-config": "workspace:*",
    "@repo/prettier-config": "workspace:*",
    "@repo/typescript-config": "workspace:*",
    "prettier": "catalog:",
    "rimraf": "^6.0.1",
    "typescript": "catalog:"
  },
  "prettier": "@repo/prettier-config",
  "dependencies": {
    "zod": "catalog:"
  },
  "exports": {
    ".": "./src/index.ts",
    "./*": "./src/*/index.ts"
  }
}"#;

const SHARED_TSCONFIG: &str = r#"{
  "extends": "@repo/typescript-config/base",
  "compilerOptions": {
    "outDir": "dist",
    "rootDir": "src"
  },
  "include": ["src"],
  "exclude": ["node_modules", "dist"]
}"#;

const SHARED_INDEX: &str = r#"export * from './utils';
export * from './types';"#;

const SHARED_UTILS: &str = r#"export function formatDate(date: Date): string {
  return date.toISOString();
}

export function sleep(ms: number): Promise<void> {
  return new Promise((resolve) => setTimeout(resolve, ms));
}"#;

const SHARED_TYPES: &str = r#"export interface ApiResponse<T> {
  data: T;
  error?: string;
  status: number;
}

export type Result<T, E = Error> = 
  | { success: true; value: T }
  | { success: false; error: E };"#;

// ── packages/web-ui ───────────────────────────────────────────────────────

const WEB_UI_PACKAGE_JSON: &str = r#"{
  "name": "@repo/web-ui",
  "version": "0.0.0",
  "type": "module",
  "private": true,
  "scripts": {
    "build": "tsc",
    "lint": "eslint . --max-warnings 0 --cache --cache-location .eslintcache",
    "format": "prettier --write .",
    "format:check": "prettier --check .",
    "clean": "rimraf node_modules dist",
    "type-check": "tsc --noEmit"
  },
  "dependencies": {
    "react": "catalog:",
    "react-dom": "catalog:"
  },
  "devDependencies": {
    "@repo/eslint-config": "workspace:*",
    "@repo/prettier-config": "workspace:*",
    "@repo/typescript-config": "workspace:*",
    "@types/node": "catalog:",
    "@types/react": "catalog:",
    "@types/react-dom": "catalog:",
    "prettier": "catalog:",
    "rimraf": "catalog:"
  },
  "prettier": "@repo/prettier-config",
  "exports": {
    ".": "./src/index.ts",
    "./components/*": "./src/components/*"
  }
}"#;

const WEB_UI_TSCONFIG: &str = r#"{
  "extends": "@repo/typescript-config/react",
  "compilerOptions": {
    "outDir": "dist",
    "rootDir": "src"
  },
  "include": ["src"],
  "exclude": ["node_modules", "dist"]
}"#;

const WEB_UI_INDEX: &str = r#"export { Button } from './components/button';"#;

const WEB_UI_BUTTON: &str = r#"import type React from 'react';

interface ButtonProps extends React.ButtonHTMLAttributes<HTMLButtonElement> {
  variant?: 'primary' | 'secondary';
  children: React.ReactNode;
}

export function Button({ 
  variant = 'primary', 
  children, 
  ...props 
}: ButtonProps) {
  const styles = {
    primary: {
      backgroundColor: '#0070f3',
      color: 'white',
      border: 'none',
      padding: '0.5rem 1rem',
      borderRadius: '0.25rem',
      cursor: 'pointer',
    },
    secondary: {
      backgroundColor: 'transparent',
      color: '#0070f3',
      border: '1px solid #0070f3',
      padding: '0.5rem 1rem',
      borderRadius: '0.25rem',
      cursor: 'pointer',
    },
  };

  return (
    <button style={styles[variant]} {...props}>
      {children}
    </button>
  );
}"#;
