//! Project scaffold
//!
//! Build configuration, root layout, global styles and the loading state.
//! Everything here depends on the theme and business identity only, never
//! on sections.

use crate::escape;
use crate::options::PackageVersions;
use crate::project::ProjectFile;
use crate::theme::ThemeBundle;
use serde_json::json;
use sitegen_ir::Business;

/// Scaffold files, in emission order
#[must_use]
pub fn scaffold_files(
    business: &Business,
    theme: &ThemeBundle,
    packages: &PackageVersions,
) -> Vec<ProjectFile> {
    vec![
        ProjectFile::new("package.json", package_json(business, packages)),
        ProjectFile::new("next.config.js", NEXT_CONFIG),
        ProjectFile::new("tsconfig.json", TSCONFIG),
        ProjectFile::new("postcss.config.js", POSTCSS_CONFIG),
        ProjectFile::new("tailwind.config.ts", TAILWIND_CONFIG),
        ProjectFile::new("app/globals.css", globals_css(theme)),
        ProjectFile::new("app/layout.tsx", layout(business, theme)),
        ProjectFile::new("app/loading.tsx", loading(theme)),
    ]
}

/// npm package name derived from the business name
#[must_use]
pub fn package_name(business: &Business) -> String {
    let mut slug = String::new();
    for c in business.name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "site".to_string()
    } else {
        slug.to_string()
    }
}

fn package_json(business: &Business, packages: &PackageVersions) -> String {
    let manifest = json!({
        "name": package_name(business),
        "version": "0.1.0",
        "private": true,
        "scripts": {
            "dev": "next dev",
            "build": "next build",
            "start": "next start",
            "lint": "next lint"
        },
        "dependencies": packages.dependencies(),
        "devDependencies": packages.dev_dependencies(),
    });
    format!("{manifest:#}\n")
}

const NEXT_CONFIG: &str = r#"/** @type {import('next').NextConfig} */
const nextConfig = {
  images: {
    unoptimized: true,
  },
};

module.exports = nextConfig;
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2017",
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "plugins": [{ "name": "next" }],
    "paths": { "@/*": ["./*"] }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
  "exclude": ["node_modules"]
}
"#;

const POSTCSS_CONFIG: &str = r"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
";

const TAILWIND_CONFIG: &str = r#"import type { Config } from "tailwindcss";

const config: Config = {
  content: ["./app/**/*.{ts,tsx}", "./components/**/*.{ts,tsx}"],
  theme: {
    extend: {
      fontFamily: {
        heading: ["var(--font-heading)", "serif"],
        body: ["var(--font-body)", "sans-serif"],
      },
      keyframes: {
        marquee: {
          "0%": { transform: "translateX(0)" },
          "100%": { transform: "translateX(-50%)" },
        },
      },
    },
  },
  plugins: [],
};

export default config;
"#;

fn globals_css(theme: &ThemeBundle) -> String {
    let scheme = if theme.is_dark() { "dark" } else { "light" };
    format!(
        r"@tailwind base;
@tailwind components;
@tailwind utilities;

:root {{
  color-scheme: {scheme};
}}

html {{
  scroll-behavior: smooth;
}}

section[id] {{
  scroll-margin-top: 5rem;
}}
"
    )
}

fn layout(business: &Business, theme: &ThemeBundle) -> String {
    let (heading, body) = theme.font_families();
    let imports = if heading == body {
        heading.to_string()
    } else {
        format!("{heading}, {body}")
    };
    let description = if business.description.trim().is_empty() {
        &business.tagline
    } else {
        &business.description
    };

    format!(
        r#"import type {{ Metadata }} from "next";
import {{ {imports} }} from "next/font/google";
import "./globals.css";
import Navbar from "@/components/Navbar";
import Footer from "@/components/Footer";

const headingFont = {heading}({{ subsets: ["latin"], variable: "--font-heading", display: "swap" }});
const bodyFont = {body}({{ subsets: ["latin"], variable: "--font-body", display: "swap" }});

export const metadata: Metadata = {{
  title: {title},
  description: {description},
}};

export default function RootLayout({{ children }}: {{ children: React.ReactNode }}) {{
  return (
    <html lang="en" className={{`${{headingFont.variable}} ${{bodyFont.variable}}`}}>
      <body className="{body_font} antialiased {page}">
        <Navbar />
        {{children}}
        <Footer />
      </body>
    </html>
  );
}}
"#,
        title = escape::js_string(&business.name),
        description = escape::js_string(description),
        body_font = theme.body_font,
        page = theme.page,
    )
}

fn loading(theme: &ThemeBundle) -> String {
    format!(
        r#"export default function Loading() {{
  return (
    <div className="flex min-h-screen items-center justify-center {page}">
      <div className="h-12 w-12 animate-spin rounded-full border-4 border-{primary}-200 border-t-{primary}-600" />
    </div>
  );
}}
"#,
        page = theme.page,
        primary = theme.theme.primary,
    )
}
