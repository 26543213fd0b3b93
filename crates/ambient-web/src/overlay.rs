use crate::constants::{CAPTION_CLASS, CAPTION_LAYER_CLASS, CAPTION_LAYER_STYLE, CAPTION_STYLE};
use crate::dom;
use ambient_core::{ChatMessage, MessageId};
use web_sys as web;

/// Floating caption nodes mirrored from the scene's active messages.
pub struct CaptionLayer {
    document: web::Document,
    root: web::HtmlElement,
    nodes: Vec<(MessageId, web::HtmlElement)>,
}

impl CaptionLayer {
    pub fn new(document: &web::Document, container: &web::Element) -> anyhow::Result<Self> {
        let root = dom::create_child(document, container, "div", CAPTION_LAYER_CLASS, CAPTION_LAYER_STYLE)?;
        Ok(Self {
            document: document.clone(),
            root,
            nodes: Vec::new(),
        })
    }

    /// Add nodes for new captions, drop expired ones, and restyle the rest.
    pub fn sync(&mut self, messages: &[ChatMessage]) {
        self.nodes.retain(|(id, node)| {
            let alive = messages.iter().any(|m| m.id == *id);
            if !alive {
                node.remove();
            }
            alive
        });

        for msg in messages {
            let existing = self.nodes.iter().position(|(id, _)| *id == msg.id);
            let idx = match existing {
                Some(i) => i,
                None => match self.create(msg) {
                    Ok(node) => {
                        log::info!("[caption] {}", msg.text);
                        self.nodes.push((msg.id, node));
                        self.nodes.len() - 1
                    }
                    Err(e) => {
                        log::warn!("[caption] could not create node: {e:?}");
                        continue;
                    }
                },
            };
            let style = self.nodes[idx].1.style();
            _ = style.set_property("left", &format!("{:.1}px", msg.anchor.x));
            _ = style.set_property("top", &format!("{:.1}px", msg.anchor.y));
            _ = style.set_property("opacity", &format!("{:.3}", msg.opacity));
        }
    }

    fn create(&self, msg: &ChatMessage) -> anyhow::Result<web::HtmlElement> {
        let node = dom::create_child(&self.document, &self.root, "div", CAPTION_CLASS, CAPTION_STYLE)?;
        node.set_text_content(Some(msg.text));
        Ok(node)
    }

    /// Remove the layer and every caption from the document.
    pub fn remove(&mut self) {
        self.nodes.clear();
        self.root.remove();
    }
}
