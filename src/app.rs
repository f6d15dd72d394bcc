mod cards;
mod dock;
mod homepage;
mod icon;
mod section;
mod spotlight;
mod theme;

pub use theme::{use_theme, ThemeContext, ThemeProvider};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use crate::seo::FAVICON_PATH;
use crate::theme::bootstrap_script;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        // dark until the bootstrap script says otherwise
        <html lang="en" class="dark">
            <head>
                // must stay the first script: it sets the theme class before paint
                <script inner_html=bootstrap_script()></script>
                <meta charset="utf-8" />
                <meta
                    name="viewport"
                    content="width=device-width, initial-scale=1, maximum-scale=5"
                />
                <meta
                    name="theme-color"
                    media="(prefers-color-scheme: light)"
                    content="#f8fafc"
                />
                <meta
                    name="theme-color"
                    media="(prefers-color-scheme: dark)"
                    content="#020617"
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="preconnect" href="https://res.cloudinary.com" />
                <link rel="icon" type="image/svg+xml" href=FAVICON_PATH />
                <link rel="manifest" href="/manifest.json" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-slate-50 dark:bg-slate-950 text-slate-900 dark:text-slate-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <SiteMeta />
        <ThemeProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </Router>
        </ThemeProvider>
    }
}

/// Search and social-card metadata for the single page.
#[component]
fn SiteMeta() -> impl IntoView {
    let headline = PROFILE.headline();
    let keywords = PROFILE.keywords.join(", ");
    view! {
        <Title text=headline.clone() />
        <Meta name="description" content=PROFILE.description />
        <Meta name="keywords" content=keywords />
        <Meta name="author" content=PROFILE.name />
        <Meta name="robots" content="index, follow, max-image-preview:large, max-snippet:-1" />
        <Link rel="canonical" href=PROFILE.site_url />

        <Meta property="og:type" content="profile" />
        <Meta property="og:locale" content="en_US" />
        <Meta property="og:url" content=PROFILE.site_url />
        <Meta property="og:site_name" content=PROFILE.name />
        <Meta property="og:title" content=headline.clone() />
        <Meta property="og:description" content=PROFILE.description />
        <Meta property="og:image" content=PROFILE.avatar_url />
        <Meta property="og:image:width" content="1200" />
        <Meta property="og:image:height" content="630" />

        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=headline />
        <Meta name="twitter:description" content=PROFILE.description />
        <Meta name="twitter:image" content=PROFILE.avatar_url />
    }
}
