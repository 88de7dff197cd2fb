use sideload::prelude::*;

const STYLES: &[&str] = &[
    "https://cdn.jsdelivr.net/npm/water.css@2/out/water.css",
    "https://cdn.jsdelivr.net/npm/water.css@2/out/water.css",
];

async fn run() -> SideloadResult<()> {
    let injector = Injector::head()?;

    // Second entry is a duplicate and comes back as `None`.
    let links = injector.attach_styles(STYLES, Some(OnLoad::new(|_| log!("stylesheet ready"))));
    log!("attached {} of {} stylesheets", links.iter().flatten().count(), links.len());

    let (script, err) = injector
        .attach_script_async_with_error("https://cdn.jsdelivr.net/npm/canvas-confetti@1", None)
        .await;
    match (script, err) {
        (Some(script), _) => log!("loaded {:?}", script.get_attribute("src")),
        (None, Some(e)) => warn!("confetti unavailable: {}", e),
        (None, None) => {}
    }

    // Kind decided by the server's content-type.
    let nodes = injector
        .attach_all_async(
            &[
                "https://cdn.jsdelivr.net/npm/dayjs@1/dayjs.min.js",
                "https://cdn.jsdelivr.net/npm/modern-normalize@2/modern-normalize.css",
            ],
            None,
        )
        .await?;
    for node in nodes {
        log!("<{}> ready", node.tag_name().to_lowercase());
    }

    Ok(())
}

fn main() {
    sideload_dom::install_panic_hook();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            error!("demo failed: {}", e);
        }
    });
}
