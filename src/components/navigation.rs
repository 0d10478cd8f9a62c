use yew::prelude::*;

/// What the main area currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Products,
    ProductDetail(u32),
}

impl Screen {
    /// Entries offered by the navigation menus
    pub const MENU: [Self; 2] = [Self::Home, Self::Products];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Products | Self::ProductDetail(_) => "Products",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Products | Self::ProductDetail(_) => "▦",
        }
    }

    /// Whether the menu entry `self` should be highlighted while `current` is shown
    pub const fn is_active(&self, current: Self) -> bool {
        matches!(
            (self, current),
            (Self::Home, Self::Home)
                | (Self::Products, Self::Products | Self::ProductDetail(_))
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct NavLinksProps {
    pub current: Screen,
    pub on_navigate: Callback<Screen>,
}

#[function_component(NavLinks)]
fn nav_links(props: &NavLinksProps) -> Html {
    Screen::MENU
        .iter()
        .map(|&screen| {
            let onclick = {
                let on_navigate = props.on_navigate.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_navigate.emit(screen);
                })
            };
            let class = classes!(
                "nav-link",
                screen.is_active(props.current).then_some("active")
            );

            html! {
                <a href="#" {class} {onclick} key={screen.label()}>
                    <span class="nav-icon">{screen.icon()}</span>
                    {screen.label()}
                </a>
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Screen,
    pub on_navigate: Callback<Screen>,
}

/// Fixed menu shown on large screens
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="sidebar">
            <nav class="nav-list">
                <NavLinks current={props.current} on_navigate={props.on_navigate.clone()} />
            </nav>
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub current: Screen,
    pub on_navigate: Callback<Screen>,
    pub on_close: Callback<()>,
}

/// Slide-in menu for small screens. Picking an entry also closes the drawer.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let on_navigate = {
        let on_navigate = props.on_navigate.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |screen| {
            on_navigate.emit(screen);
            on_close.emit(());
        })
    };
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <>
            <div class={classes!("mobile-menu", props.open.then_some("open"))}>
                <button class="mobile-menu-close" onclick={close.clone()} aria-label="Close menu">
                    {"✕"}
                </button>
                <nav class="nav-list">
                    <NavLinks current={props.current} {on_navigate} />
                </nav>
            </div>
            if props.open {
                <div class="mobile-menu-overlay" onclick={close} />
            }
        </>
    }
}
