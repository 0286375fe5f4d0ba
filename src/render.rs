use web_sys::{Document, Element};
use yew::{AppHandle, BaseComponent, Renderer};

use crate::dom;
use crate::error::EnhanceError;

/// A Yew app rendered into its own host `<div>` at the end of `<body>`.
///
/// The host exists only for the lifetime of the app: `unmount` destroys the
/// app (running hook cleanups, which releases any listeners they hold) and
/// then detaches the host.
pub struct Mounted<COMP: BaseComponent> {
    handle: AppHandle<COMP>,
    host: Element,
}

impl<COMP: BaseComponent> Mounted<COMP> {
    pub fn new(document: &Document, props: COMP::Properties) -> Result<Self, EnhanceError> {
        let host = document.create_element("div")?;
        dom::body(document)?.append_child(&host)?;
        let handle = Renderer::<COMP>::with_root_and_props(host.clone(), props).render();
        Ok(Self { handle, host })
    }

    pub fn unmount(self) {
        self.handle.destroy();
        self.host.remove();
    }
}
