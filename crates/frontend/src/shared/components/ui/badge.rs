use crate::shared::crud::entity::Tone;
use leptos::prelude::*;

pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "badge badge--success",
        Tone::Warning => "badge badge--warning",
        Tone::Danger => "badge badge--error",
        Tone::Neutral => "badge badge--neutral",
    }
}

#[component]
pub fn Badge(
    tone: Tone,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=tone_class(tone)>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danger_uses_error_modifier() {
        assert_eq!(tone_class(Tone::Danger), "badge badge--error");
    }
}
