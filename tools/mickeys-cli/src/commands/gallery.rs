//! Photo gallery.

use anyhow::{Context as _, Result};
use mickeys_commerce::catalog::GalleryImage;

use super::GalleryArgs;
use crate::context::Context;

/// Run the gallery command.
pub async fn run(args: GalleryArgs, ctx: &Context) -> Result<()> {
    let client = ctx.gallery_client()?;

    let spinner = ctx.output.spinner("Loading gallery...");
    let result = client.fetch().await;
    spinner.finish_and_clear();
    let gallery = result.context("Failed to load gallery")?;

    let images: Vec<&GalleryImage> = match args.category {
        Some(ref category) => gallery.in_category(category).collect(),
        None => gallery.images().iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&images);
        return Ok(());
    }

    if images.is_empty() {
        ctx.output.info("No images found");
        return Ok(());
    }

    let categories: Vec<&str> = match args.category {
        Some(ref category) => vec![category.as_str()],
        None => gallery.categories(),
    };

    for category in categories {
        ctx.output.header(category);
        for image in images
            .iter()
            .filter(|i| i.category.eq_ignore_ascii_case(category))
        {
            ctx.output.list_item(&format!("{}  {}", image.title, image.url));
            if !image.description.is_empty() {
                ctx.output.debug(&image.description);
            }
        }
    }

    Ok(())
}
