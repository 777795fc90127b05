//! Sketch gallery
//!
//! One thumbnail per listing entry, each with its own canvas and selection
//! checkbox. Building the gallery decodes and paints every thumbnail in
//! parallel; a descriptor that fails to decode only marks its own thumbnail
//! as broken.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::deletion::{is_valid_name, DeletionRequest};
use crate::listing::{Listing, NameRules};
use crate::render::{canvas_id, PixelCanvas, SurfaceRegistry, ThumbnailRenderer};
use crate::sketch::{DecodeError, Descriptor};

type Painted = (PixelCanvas, Result<(), DecodeError>);

/// A listed sketch and its selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Name shown to the user and sent back for deletion.
    pub name: String,
    /// File name as listed by the server.
    pub file_name: String,
    /// Raw descriptor text.
    pub descriptor: String,
    /// Id of this thumbnail's canvas in the gallery registry.
    pub canvas_id: String,
    /// Decode failure, if the descriptor could not be painted.
    pub error: Option<DecodeError>,
    /// Selection checkbox.
    pub checked: bool,
}

impl Thumbnail {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Whether the name can be sent in a deletion request.
    pub fn is_selectable(&self) -> bool {
        is_valid_name(&self.name)
    }
}

/// Thumbnails in listing order plus the canvases they are drawn on.
#[derive(Debug, Default)]
pub struct Gallery {
    thumbnails: Vec<Thumbnail>,
    canvases: SurfaceRegistry<PixelCanvas>,
    /// Listing segments that could not be parsed.
    skipped: usize,
}

impl Gallery {
    /// Build a gallery from a parsed listing, painting every valid sketch
    /// onto a `size` x `size` canvas.
    pub fn from_listing(
        listing: &Listing,
        renderer: &ThumbnailRenderer,
        rules: &NameRules,
        size: u32,
    ) -> Self {
        let painted: Vec<Painted> = listing
            .entries
            .par_iter()
            .map(|entry| {
                let mut canvas = PixelCanvas::new(size, size);
                let result = Descriptor::decode(&entry.descriptor)
                    .map(|descriptor| renderer.paint(&descriptor, &mut canvas));
                (canvas, result)
            })
            .collect();

        let mut gallery = Gallery {
            skipped: listing.skipped.len(),
            ..Gallery::default()
        };
        let mut used_ids = HashSet::new();

        for (entry, (canvas, result)) in listing.entries.iter().zip(painted) {
            let name = entry.display_name(rules);
            let id = unique_canvas_id(&name, &mut used_ids);
            gallery.canvases.insert(id.clone(), canvas);

            let error = match result {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!(sketch = %name, "undecodable sketch: {}", e);
                    Some(e)
                }
            };

            gallery.thumbnails.push(Thumbnail {
                name,
                file_name: entry.file_name.clone(),
                descriptor: entry.descriptor.clone(),
                canvas_id: id,
                error,
                checked: false,
            });
        }

        tracing::debug!(
            thumbnails = gallery.thumbnails.len(),
            broken = gallery.broken_count(),
            "built gallery"
        );
        gallery
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    pub fn get(&self, idx: usize) -> Option<&Thumbnail> {
        self.thumbnails.get(idx)
    }

    /// Canvas of the thumbnail at `idx`.
    pub fn canvas(&self, idx: usize) -> Option<&PixelCanvas> {
        let thumbnail = self.thumbnails.get(idx)?;
        self.canvases.get(&thumbnail.canvas_id)
    }

    pub fn len(&self) -> usize {
        self.thumbnails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    /// Listing segments dropped as malformed.
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    /// Thumbnails whose descriptor failed to decode.
    pub fn broken_count(&self) -> usize {
        self.thumbnails.iter().filter(|t| !t.is_valid()).count()
    }

    // Selection

    /// Flip the checkbox at `idx`. Thumbnails that cannot be named in a
    /// deletion request stay unchecked.
    pub fn toggle(&mut self, idx: usize) {
        if let Some(thumbnail) = self.thumbnails.get_mut(idx) {
            thumbnail.checked = !thumbnail.checked && thumbnail.is_selectable();
        }
    }

    /// Select everything, or clear the selection if everything is selected.
    pub fn toggle_all(&mut self) {
        let all_checked = self
            .thumbnails
            .iter()
            .filter(|t| t.is_selectable())
            .all(|t| t.checked)
            && self.thumbnails.iter().any(Thumbnail::is_selectable);
        for thumbnail in &mut self.thumbnails {
            thumbnail.checked = !all_checked && thumbnail.is_selectable();
        }
    }

    pub fn select_none(&mut self) {
        for thumbnail in &mut self.thumbnails {
            thumbnail.checked = false;
        }
    }

    /// Check every unchecked thumbnail matching `predicate`; returns how
    /// many were newly checked.
    pub fn select_where(&mut self, predicate: impl Fn(&Thumbnail) -> bool) -> usize {
        let mut count = 0;
        for thumbnail in &mut self.thumbnails {
            if !thumbnail.checked && thumbnail.is_selectable() && predicate(thumbnail) {
                thumbnail.checked = true;
                count += 1;
            }
        }
        count
    }

    /// Check every thumbnail whose name matches the glob `pattern`.
    pub fn select_matching(&mut self, pattern: &str) -> usize {
        self.select_where(|t| glob_match(&t.name, pattern))
    }

    pub fn selected_count(&self) -> usize {
        self.thumbnails.iter().filter(|t| t.checked).count()
    }

    /// Names of checked thumbnails, in gallery order.
    pub fn selected_names(&self) -> Vec<String> {
        self.thumbnails
            .iter()
            .filter(|t| t.checked && t.is_selectable())
            .map(|t| t.name.clone())
            .collect()
    }

    /// Deletion request for the current selection.
    pub fn deletion_request(&self) -> Option<DeletionRequest> {
        DeletionRequest::from_selected(self.selected_names())
    }

    /// Drop thumbnails named in `names` (after a successful delete).
    pub fn remove_names(&mut self, names: &[String]) {
        let names: HashSet<&str> = names.iter().map(String::as_str).collect();
        let canvases = &mut self.canvases;
        self.thumbnails.retain(|t| {
            let keep = !names.contains(t.name.as_str());
            if !keep {
                canvases.remove(&t.canvas_id);
            }
            keep
        });
    }
}

/// Case-insensitive glob match supporting `*` (any run) and `?` (one char).
pub fn glob_match(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.to_lowercase().chars().collect();
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    glob_match_chars(&text, &pattern)
}

// Iterative match; on a mismatch, retry from the last `*` one char further.
fn glob_match_chars(text: &[char], pattern: &[char]) -> bool {
    let (mut t, mut p) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                star = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                t += 1;
                p += 1;
            }
            _ => match star {
                Some((star_p, star_t)) => {
                    p = star_p + 1;
                    t = star_t + 1;
                    star = Some((star_p, star_t + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

/// `canvas_<name>`, with a numeric suffix when the name repeats.
fn unique_canvas_id(name: &str, used: &mut HashSet<String>) -> String {
    let base = canvas_id(name);
    let mut id = base.clone();
    let mut n = 2;
    while used.contains(&id) {
        id = format!("{}_{}", base, n);
        n += 1;
    }
    used.insert(id.clone());
    id
}
