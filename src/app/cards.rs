use leptos::prelude::*;

use crate::content::{Highlight, SocialLink};

use super::icon::SvgIcon;
use super::spotlight::SpotlightCard;

#[component]
pub fn HighlightCards(highlights: &'static [Highlight]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 sm:gap-6">
            {highlights
                .iter()
                .map(|h| {
                    view! {
                        <SpotlightCard class="p-5 sm:p-8" hover_effect=true>
                            <div class=format!(
                                "w-10 h-10 sm:w-12 sm:h-12 rounded-xl sm:rounded-2xl flex items-center justify-center mb-4 sm:mb-6 {}",
                                h.accent.icon_classes(),
                            )>
                                <SvgIcon icon=h.icon class="w-5 h-5 sm:w-6 sm:h-6" />
                            </div>
                            <h3 class="text-lg sm:text-xl md:text-2xl font-bold text-slate-900 dark:text-white mb-2 sm:mb-3">
                                {h.title}
                            </h3>
                            <p class="text-sm sm:text-base text-slate-700 dark:text-slate-300 leading-relaxed">
                                {h.description}
                            </p>
                        </SpotlightCard>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// External profile link with a 48px minimum touch target.
#[component]
pub fn SocialLinkCard(link: SocialLink) -> impl IntoView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="group block rounded-xl transition-transform duration-200 hover:scale-[1.02] active:scale-[0.97] focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-cyan-500"
            aria-label=format!("Visit {} - {}", link.label, link.caption)
        >
            <div class="flex items-center gap-3 sm:gap-4 p-3 sm:p-4 min-h-[48px] bg-white/60 dark:bg-white/5 hover:bg-white/80 dark:hover:bg-white/10 backdrop-blur-md border border-black/5 dark:border-white/5 hover:border-black/10 dark:hover:border-white/20 rounded-xl transition-colors duration-300 shadow-sm hover:shadow-md dark:shadow-none">
                <div class="shrink-0 p-2.5 rounded-full bg-slate-100 dark:bg-slate-800 border border-black/5 dark:border-white/10 group-hover:border-cyan-500/30 text-slate-600 dark:text-slate-400 group-hover:text-cyan-600 dark:group-hover:text-cyan-400 transition-colors duration-300">
                    <SvgIcon icon=link.icon />
                </div>
                <div class="min-w-0">
                    <p class="text-sm font-bold text-slate-900 dark:text-slate-200 group-hover:text-cyan-700 dark:group-hover:text-white transition-colors truncate">
                        {link.label}
                    </p>
                    <p class="text-xs text-slate-600 dark:text-slate-400 group-hover:text-slate-700 dark:group-hover:text-slate-300 transition-colors truncate">
                        {link.caption}
                    </p>
                </div>
            </div>
        </a>
    }
}
