use yew::{AttrValue, Html, Properties, function_component, html};

/// Up to two upper-case initials from `name`, or `U` when there are none.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "U".to_string()
    } else {
        letters
    }
}

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub name: AttrValue,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    html! {
        <div class="avatar-ring rounded-full grid place-items-center w-11 h-11 ring-2 ring-white/20">
            <span class="font-bold text-sm text-black">{ initials(&props.name) }</span>
        </div>
    }
}
