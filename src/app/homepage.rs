use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::{json_ld_script, Profile, PROFILE};
use crate::icon::Icon;

use super::cards::{HighlightCards, SocialLinkCard};
use super::dock::BottomDock;
use super::icon::SvgIcon;
use super::section::RevealSection;
use super::spotlight::SpotlightCard;

const NOISE_SVG: &str = "url(\"data:image/svg+xml,%3Csvg viewBox='0 0 100 100' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.65' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)'/%3E%3C/svg%3E\")";

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = &PROFILE;
    let json_ld = json_ld_script(profile).unwrap_or_else(|e| {
        log::error!("structured data not rendered: {e}");
        String::new()
    });
    view! {
        <script type="application/ld+json" inner_html=json_ld></script>
        <div class="min-h-screen w-full relative overflow-x-hidden pb-28 sm:pb-32">
            <NoiseOverlay />
            <BottomDock />
            <BackgroundOrbs />
            <main class="relative z-10">
                <div id="home">
                    <Hero profile />
                </div>
                <div id="about">
                    <RevealSection delay=0.1 class="px-4">
                        <SectionHeading icon=Icon::Briefcase tone="cyan" title="Professional Overview" />
                        <SpotlightCard class="p-6 sm:p-8 md:p-12">
                            <p class="text-slate-700 dark:text-slate-300 leading-relaxed text-base sm:text-lg md:text-xl font-light text-justify">
                                "As the " {profile.role} " of "
                                <OrgLinks profile class="font-semibold text-slate-900 dark:text-white hover:text-cyan-700 dark:hover:text-cyan-400 transition-colors" />
                                ", " {profile.biography}
                            </p>
                            <ul class="mt-6 sm:mt-8 flex flex-wrap gap-2 sm:gap-3" aria-label="Professional focus areas">
                                {profile
                                    .focus_tags
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <li>
                                                <span class="inline-block px-3 sm:px-4 py-1.5 sm:py-2 rounded-full bg-slate-100 dark:bg-white/5 border border-slate-200 dark:border-white/10 text-xs sm:text-sm font-semibold text-slate-700 dark:text-slate-300 tracking-wide hover:bg-cyan-50 dark:hover:bg-cyan-900/20 transition-colors cursor-default">
                                                    {*tag}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </SpotlightCard>
                    </RevealSection>
                </div>
                <div id="education">
                    <RevealSection delay=0.15 class="px-4">
                        <SectionHeading icon=Icon::GraduationCap tone="amber" title="Education" />
                        <SpotlightCard class="p-6 sm:p-8 md:p-12">
                            <h3 class="text-lg sm:text-xl md:text-2xl font-bold text-slate-900 dark:text-white mb-2">
                                {profile.education.degree}
                            </h3>
                            <p class="text-slate-700 dark:text-slate-300 text-sm sm:text-lg font-medium">
                                {profile.education.institution}
                            </p>
                        </SpotlightCard>
                    </RevealSection>
                </div>
                <div id="highlights">
                    <RevealSection delay=0.2 class="px-4">
                        <SectionHeading icon=Icon::Zap tone="violet" title="Key Highlights" />
                        <HighlightCards highlights=profile.highlights />
                    </RevealSection>
                </div>
                <div id="connect">
                    <RevealSection delay=0.25 class="px-4">
                        <SectionHeading icon=Icon::Users tone="emerald" title="Connect" />
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 sm:gap-4">
                            {profile
                                .social_links
                                .iter()
                                .map(|link| view! { <SocialLinkCard link=*link /> })
                                .collect_view()}
                        </div>
                    </RevealSection>
                </div>
                <CallToAction profile />
                <footer class="text-center text-slate-600 dark:text-slate-400 text-xs sm:text-sm py-6 sm:py-8 border-t border-slate-100 dark:border-white/5 mt-10">
                    <p>
                        {format!("© {} {} • {} Portfolio", Utc::now().year(), profile.name, profile.role)}
                    </p>
                </footer>
            </main>
        </div>
    }
}

#[component]
fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <RevealSection animate=false class="pt-20 pb-10 sm:pt-28 md:pt-36 md:pb-20 text-center px-4">
            // scale-only entrance so the avatar is painted immediately
            <div class="hero-enter relative inline-block mb-8 md:mb-12 group">
                <div
                    aria-hidden="true"
                    class="hero-glow absolute inset-0 rounded-full bg-gradient-to-tr from-cyan-500 to-violet-500 blur-2xl opacity-20 group-hover:opacity-40 transition-opacity duration-500"
                />
                <div class="hero-float">
                    <img
                        src=profile.avatar_url
                        alt=format!("{} - {}", profile.name, profile.role)
                        width="224"
                        height="224"
                        fetchpriority="high"
                        class="relative w-32 h-32 sm:w-44 sm:h-44 md:w-56 md:h-56 rounded-full border-4 border-white/20 dark:border-white/10 shadow-2xl object-cover mx-auto"
                    />
                </div>
            </div>

            <h1 class="text-3xl sm:text-5xl md:text-6xl font-extrabold tracking-tight mb-4 sm:mb-6">
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-slate-900 via-cyan-700 to-slate-900 dark:from-white dark:via-slate-200 dark:to-slate-400 drop-shadow-sm pb-1">
                    {profile.name}
                </span>
            </h1>

            <div class="flex flex-col items-center gap-3 mb-8 sm:mb-10">
                <div class="flex items-center justify-center gap-3">
                    <span aria-hidden="true" class="h-px w-8 sm:w-12 bg-gradient-to-r from-transparent to-cyan-500" />
                    <span class="text-base sm:text-2xl md:text-3xl font-bold text-cyan-700 dark:text-cyan-200 uppercase tracking-[0.2em] sm:tracking-[0.25em]">
                        {profile.role}
                    </span>
                    <span aria-hidden="true" class="h-px w-8 sm:w-12 bg-gradient-to-l from-transparent to-cyan-500" />
                </div>
                <div class="flex flex-col md:flex-row items-center justify-center gap-1 sm:gap-2 text-xs sm:text-base md:text-lg text-slate-700 dark:text-slate-300 font-semibold tracking-wide max-w-xs sm:max-w-3xl mx-auto leading-relaxed uppercase opacity-90 text-center">
                    {profile
                        .organizations
                        .iter()
                        .enumerate()
                        .map(|(i, org)| {
                            view! {
                                {(i > 0)
                                    .then(|| {
                                        view! {
                                            <span aria-hidden="true" class="hidden md:inline text-cyan-500">
                                                "•"
                                            </span>
                                        }
                                    })}
                                <a
                                    href=org.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-cyan-700 dark:hover:text-cyan-400 transition-colors underline-offset-2"
                                >
                                    {org.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <p class="text-slate-700 dark:text-slate-300 max-w-sm sm:max-w-2xl mx-auto text-base sm:text-xl md:text-2xl leading-relaxed px-2 sm:px-4 font-light">
                {profile.tagline}
                " "
                <br class="hidden md:block" />
                {profile.mission}
            </p>
        </RevealSection>
    }
}

/// Organisation names joined with "and", each linking out. The first word of
/// the name is used as the short form.
#[component]
fn OrgLinks(profile: &'static Profile, class: &'static str) -> impl IntoView {
    let count = profile.organizations.len();
    profile
        .organizations
        .iter()
        .enumerate()
        .map(|(i, org)| {
            let short = org.name.split_whitespace().next().unwrap_or(org.name);
            let sep = match count - i {
                1 => "",
                2 => " and ",
                _ => ", ",
            };
            view! {
                <a href=org.url target="_blank" rel="noopener noreferrer" class=class>
                    {short}
                </a>
                {sep}
            }
        })
        .collect_view()
}

#[component]
fn SectionHeading(icon: Icon, tone: &'static str, title: &'static str) -> impl IntoView {
    let tile = match tone {
        "amber" => "bg-amber-100 dark:bg-amber-900/30 text-amber-600 dark:text-amber-400",
        "violet" => "bg-violet-100 dark:bg-violet-900/30 text-violet-600 dark:text-violet-400",
        "emerald" => "bg-emerald-100 dark:bg-emerald-900/30 text-emerald-600 dark:text-emerald-400",
        _ => "bg-cyan-100 dark:bg-cyan-900/30 text-cyan-700 dark:text-cyan-400",
    };
    view! {
        <div class="flex items-center gap-3 mb-5 md:mb-8">
            <div class=format!("p-2 rounded-lg {tile}")>
                <SvgIcon icon class="w-5 h-5 sm:w-6 sm:h-6" />
            </div>
            <h2 class="text-xl sm:text-3xl font-bold text-slate-900 dark:text-white tracking-tight">
                {title}
            </h2>
        </div>
    }
}

#[component]
fn CallToAction(profile: &'static Profile) -> impl IntoView {
    let mailto = format!("mailto:{}", profile.email);
    view! {
        <RevealSection delay=0.3 class="text-center px-4">
            <SpotlightCard class="p-5 sm:p-10 md:p-20 bg-gradient-to-b from-slate-50 to-white dark:from-white/5 dark:to-white/[0.02]">
                <h2 class="text-xl sm:text-3xl md:text-5xl font-bold text-slate-900 dark:text-white mb-3 sm:mb-6">
                    "Ready to Collaborate?"
                </h2>
                <p class="text-slate-700 dark:text-slate-300 mb-6 sm:mb-10 max-w-xs sm:max-w-xl mx-auto text-sm sm:text-lg md:text-xl font-light text-center leading-relaxed">
                    "I am always open to discussing new ventures, speaking engagements, and strategic partnerships."
                </p>
                <div class="flex flex-col items-center gap-1.5 sm:gap-2 mb-6 sm:mb-8">
                    <a
                        href=mailto.clone()
                        class="text-base sm:text-xl font-medium text-slate-900 dark:text-white hover:text-cyan-700 dark:hover:text-cyan-400 transition-colors"
                    >
                        {profile.email}
                    </a>
                    <a
                        href=format!("tel:{}", profile.phone)
                        class="text-base sm:text-xl font-medium text-slate-900 dark:text-white hover:text-cyan-700 dark:hover:text-cyan-400 transition-colors"
                    >
                        {profile.phone_display}
                    </a>
                </div>
                <a
                    href=mailto
                    class="inline-flex items-center justify-center gap-2 sm:gap-3 px-6 py-3.5 sm:px-10 sm:py-5 bg-slate-900 dark:bg-white text-white dark:text-slate-950 rounded-full font-bold text-sm sm:text-xl hover:bg-slate-800 dark:hover:bg-cyan-50 transition-all shadow-xl shadow-slate-900/20 dark:shadow-white/10 w-full sm:w-auto min-h-[48px]"
                >
                    <SvgIcon icon=Icon::Mail />
                    <span>"Get in Touch"</span>
                    <SvgIcon icon=Icon::ArrowRight />
                </a>
            </SpotlightCard>
        </RevealSection>
    }
}

#[component]
fn NoiseOverlay() -> impl IntoView {
    view! {
        <div
            aria-hidden="true"
            class="fixed inset-0 z-[9999] pointer-events-none opacity-[0.45] mix-blend-soft-light"
            style:background-image=NOISE_SVG
            style:background-size="100px 100px"
        />
    }
}

/// Blurred colour orbs behind the content. Only `.orb-pulse` animates, and
/// only its opacity.
#[component]
fn BackgroundOrbs() -> impl IntoView {
    view! {
        <div aria-hidden="true" class="fixed inset-0 z-0 pointer-events-none overflow-hidden">
            <div class="hidden dark:block">
                <div class="orb-pulse absolute top-[-10%] left-[-10%] w-[300px] h-[300px] sm:w-[500px] sm:h-[500px] bg-cyan-900/20 rounded-full blur-[80px] sm:blur-[120px] opacity-50 mix-blend-screen" />
                <div class="absolute bottom-[-10%] right-[-10%] w-[350px] h-[350px] sm:w-[600px] sm:h-[600px] bg-violet-900/20 rounded-full blur-[80px] sm:blur-[120px] opacity-40 mix-blend-screen" />
                <div class="absolute top-[40%] left-[50%] -translate-x-1/2 w-[400px] h-[400px] sm:w-[800px] sm:h-[800px] bg-slate-900/50 rounded-full blur-[80px] sm:blur-[100px] opacity-30" />
            </div>
            <div class="block dark:hidden">
                <div class="absolute top-[-10%] left-[-10%] w-[300px] h-[300px] sm:w-[500px] sm:h-[500px] bg-cyan-200/40 rounded-full blur-[60px] sm:blur-[100px] opacity-60 mix-blend-multiply" />
                <div class="absolute bottom-[-10%] right-[-10%] w-[350px] h-[350px] sm:w-[600px] sm:h-[600px] bg-violet-200/40 rounded-full blur-[60px] sm:blur-[100px] opacity-60 mix-blend-multiply" />
                <div class="absolute top-[30%] left-[60%] w-[200px] h-[200px] sm:w-[400px] sm:h-[400px] bg-blue-100/50 rounded-full blur-[50px] sm:blur-[80px] opacity-50" />
            </div>
        </div>
    }
}
