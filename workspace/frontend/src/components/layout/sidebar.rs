use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Static sidebar menu entry. `prefix` marks entries that stay highlighted
/// for nested paths (e.g. "Clients" while viewing `/clients/5`).
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    pub route: Route,
    pub prefix: bool,
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Home",
            icon: "fas fa-home",
            path: "/",
            route: Route::Home,
            prefix: false,
        },
        NavItem {
            label: "Activities",
            icon: "fas fa-dumbbell",
            path: "/activities",
            route: Route::Activities,
            prefix: true,
        },
        NavItem {
            label: "Clients",
            icon: "fas fa-users",
            path: "/clients",
            route: Route::Clients,
            prefix: true,
        },
        NavItem {
            label: "Settings",
            icon: "fas fa-cog",
            path: "/settings",
            route: Route::Settings,
            prefix: false,
        },
    ]
}

/// An item is active on an exact path match, or, for prefix items, when the
/// current path sits below it. At most one item matches any given path.
pub fn is_active(current_path: &str, item: &NavItem) -> bool {
    current_path == item.path
        || (item.prefix && current_path.starts_with(&format!("{}/", item.path)))
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let location = use_location();
    let current_path = location
        .as_ref()
        .map(|loc| loc.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="app-drawer"></label>
            <ul class="menu p-4 w-72 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-dumbbell"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"GymDash"}</span>
                    </div>
                </li>

                {for nav_items().into_iter().map(|item| {
                    let active = is_active(&current_path, &item);
                    html! {
                        <li>
                            <Link<Route>
                                to={item.route.clone()}
                                classes={classes!("nav-link", active.then_some("active"))}
                            >
                                <i class={classes!(item.icon, "w-5")}></i>
                                {item.label}
                            </Link<Route>>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(path: &str) -> Vec<&'static str> {
        nav_items()
            .iter()
            .filter(|item| is_active(path, item))
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn test_exact_match_activates_single_item() {
        assert_eq!(active_labels("/"), vec!["Home"]);
        assert_eq!(active_labels("/activities"), vec!["Activities"]);
        assert_eq!(active_labels("/clients"), vec!["Clients"]);
        assert_eq!(active_labels("/settings"), vec!["Settings"]);
    }

    #[test]
    fn test_client_detail_keeps_clients_active() {
        assert_eq!(active_labels("/clients/5"), vec!["Clients"]);
    }

    #[test]
    fn test_at_most_one_item_active() {
        for path in ["/", "/activities", "/clients", "/clients/17", "/settings", "/404"] {
            assert!(active_labels(path).len() <= 1, "path {} matched twice", path);
        }
    }

    #[test]
    fn test_unrelated_prefix_does_not_match() {
        // "/clientsfoo" is not below "/clients"
        assert!(active_labels("/clientsfoo").is_empty());
    }
}
