//! # Example: page_bootstrap
//!
//! A product page with two declared modules, one always-run module and a controller,
//! started through the polling fallback with a [`LogWriter`] attached.
//!
//! ## Flow
//! ```text
//! Page::builder(cfg).with_subscribers([LogWriter]).build()
//!     ├─► register analytics (always), gallery, nav (lazy), controller "product"
//!     ├─► listen(root, probe)      probe passes on the 3rd tick
//!     │     ├─► publish(PageReady)
//!     │     ├─► init(["gallery", "nav"]) → gallery, nav, analytics
//!     │     └─► run("product")
//!     ├─► reset("gallery") + run("product") (skipped: already initialized)
//!     └─► shutdown() flushes the log
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example page_bootstrap --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use pageboot::{
    Attributes, Config, Factory, LogWriter, Page, Scope, Subscribe, Unit, UnitError, UnitFn,
};
use tokio_util::sync::CancellationToken;

struct Gallery {
    slides: Vec<&'static str>,
    current: usize,
}

impl Unit for Gallery {
    fn init(&mut self) -> Result<(), UnitError> {
        if self.slides.is_empty() {
            return Err(UnitError::fail("gallery has no slides"));
        }
        self.current = 0;
        println!("[gallery] showing {}", self.slides[self.current]);
        Ok(())
    }

    fn reset(&mut self) -> Result<(), UnitError> {
        println!("[gallery] torn down");
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config {
        poll_interval: Duration::from_millis(5),
        ..Config::default()
    };
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];
    let mut page = Page::builder(cfg).with_subscribers(subs).build();

    let registry = page.registry_mut();
    registry.register_module(
        "analytics",
        Factory::object(UnitFn::new(0u32).on_init(|views: &mut u32| {
            *views += 1;
            println!("[analytics] page view #{views}");
            Ok(())
        })),
        Scope::Always,
    )?;
    registry.register_module(
        "gallery",
        Factory::object(Gallery {
            slides: vec!["front.jpg", "side.jpg"],
            current: 0,
        }),
        Scope::Declared,
    )?;
    registry.register_module(
        "nav",
        Factory::producer(|| {
            println!("[nav] building menu");
            UnitFn::new(()).on_init(|_: &mut ()| Ok(()))
        }),
        Scope::Declared,
    )?;
    registry.register_controller(
        "product",
        Factory::object(UnitFn::new(()).on_init(|_: &mut ()| {
            println!("[product] controller ready");
            Ok(())
        })),
    )?;

    let root = Attributes::new()
        .with("id", "product")
        .with("data-modules", "gallery nav");

    let mut ticks = 0;
    let token = CancellationToken::new();
    let started = page
        .listen(
            &root,
            || {
                ticks += 1;
                ticks >= 3
            },
            &token,
        )
        .await?;
    println!("[demo] started={started} after {ticks} probes");

    page.registry_mut().reset("gallery")?;
    page.registry_mut().run("product")?;

    page.shutdown().await;
    Ok(())
}
