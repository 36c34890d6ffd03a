use std::{cell::RefCell, rc::Rc};

use floem_reactive::create_effect;
use nautilus_store::{PathStore, Resolved, Route, Router};
use strum::IntoEnumIterator;

fn site_router() -> Router<&'static str> {
    Route::iter().fold(Router::new("not-found"), |router, route| {
        router.route(route.path(), route.title())
    })
}

#[test]
fn current_path_follows_navigate() {
    let paths = PathStore::new("/");
    for path in ["/magaza", "/sunucular", "/unknown", "/", "/"] {
        paths.navigate(path);
        assert_eq!(paths.current_path(), path);
    }
    assert_eq!(paths.history_len(), 6);
}

#[test]
fn store_and_unknown_routes() {
    let router = site_router();
    let paths = PathStore::new("/");

    paths.navigate("/magaza");
    assert_eq!(
        router.resolve(&paths.current_path()),
        Resolved::Found {
            pattern: "/magaza",
            handler: &"Mağaza"
        }
    );

    paths.navigate("/unknown");
    let resolved = router.resolve(&paths.current_path());
    assert_eq!(*resolved.handler(), "not-found");

    paths.navigate(Route::Home.path());
    assert_eq!(
        router.resolve(&paths.current_path()).handler(),
        &"Ana Sayfa"
    );
}

#[test]
fn back_and_forward_restore_paths() {
    let paths = PathStore::new("/");
    assert!(!paths.back());

    paths.navigate("/sunucular");
    paths.navigate("/magaza");

    assert!(paths.back());
    assert_eq!(paths.current_path(), "/sunucular");
    assert!(paths.back());
    assert_eq!(paths.current_path(), "/");
    assert!(!paths.can_go_back());

    assert!(paths.forward());
    assert_eq!(paths.current_path(), "/sunucular");
    assert!(paths.can_go_forward());

    paths.navigate("/discord");
    assert!(!paths.can_go_forward());
    assert!(!paths.forward());
    assert!(paths.back());
    assert_eq!(paths.current_path(), "/sunucular");
}

#[test]
fn subscribers_see_every_change() {
    let paths = PathStore::new("/");
    let seen = Rc::new(RefCell::new(Vec::new()));

    paths.subscribe({
        let seen = seen.clone();
        move |path| seen.borrow_mut().push(path.to_owned())
    });

    paths.navigate("/magaza");
    paths.navigate("/magaza");
    assert!(paths.back());
    assert!(paths.forward());

    assert_eq!(
        *seen.borrow(),
        ["/", "/magaza", "/magaza", "/magaza", "/magaza"]
    );
}

#[test]
fn effects_track_current_path() {
    let paths = PathStore::new("/");
    let on_store = Rc::new(RefCell::new(Vec::new()));

    create_effect({
        let on_store = on_store.clone();
        move |_| on_store.borrow_mut().push(paths.is_current(Route::Store.path()))
    });

    paths.navigate("/magaza");
    paths.navigate("/siralama");

    assert_eq!(*on_store.borrow(), [false, true, false]);
}
