use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{Section, eyre::eyre};
use itertools::{Either, Itertools};
use rayon::prelude::*;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::{FormatOptions, INPUT_EXT, OUTPUT_DIR, OUTPUT_EXT},
    transformer::transform,
    types::CommentBody,
};

type SourceDoc = (PathBuf, String);
type FormattedDoc = (PathBuf, String);

/// Format every comment dump under `root` into its `formatted/` directory
/// using the given options snapshot.
pub fn format_tree(root: &Path, options: FormatOptions) -> color_eyre::Result<()> {
    let ctx = FormatCtx::load_at(root, options)?;
    fs::create_dir_all(&ctx.output_dir)
        .with_note(|| format!("While creating {}", ctx.output_dir.display()))?;

    Pipeline::new(ctx).discover()?.read()?.transform().emit()
}

/// Transform every paragraph of one raw comment body.
pub fn format_comment(raw: &str, options: FormatOptions) -> String {
    if !options.enabled {
        return raw.to_string();
    }

    CommentBody::new(raw)
        .paragraphs()
        .iter()
        .map(|p| transform(p.as_str()))
        .join("\n\n")
}

struct FormatCtx {
    input_dir: PathBuf,
    output_dir: PathBuf,
    options: FormatOptions,
}

impl FormatCtx {
    fn load_at(root: &Path, options: FormatOptions) -> color_eyre::Result<Self> {
        if !root.is_dir() {
            return Err(eyre!("{} is not a directory", root.display()));
        }
        Ok(Self {
            input_dir: root.to_path_buf(),
            output_dir: root.join(OUTPUT_DIR),
            options,
        })
    }
}

fn discover_sources(ctx: &FormatCtx) -> color_eyre::Result<Vec<PathBuf>> {
    let (entries, errors): (Vec<DirEntry>, Vec<walkdir::Error>) = WalkDir::new(&ctx.input_dir)
        .into_iter()
        .filter_entry(|e| e.path() != ctx.output_dir)
        .partition_map(|r| match r {
            Ok(v) => Either::Left(v),
            Err(e) => Either::Right(e),
        });

    if !errors.is_empty() {
        return Err(eyre!("Failed to open some directory entries: {errors:?}"));
    }

    let mut paths: Vec<PathBuf> = entries
        .into_iter()
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == INPUT_EXT))
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    debug!(count = paths.len(), "discovered comment dumps");
    Ok(paths)
}

fn read_sources(paths: Vec<PathBuf>) -> color_eyre::Result<Vec<SourceDoc>> {
    let (docs, errors): (Vec<SourceDoc>, Vec<(PathBuf, std::io::Error)>) =
        paths
            .into_iter()
            .partition_map(|path| match fs::read_to_string(&path) {
                Ok(content) => Either::Left((path, content)),
                Err(e) => Either::Right((path, e)),
            });

    if !errors.is_empty() {
        return Err(eyre!("Failed to read some files: {errors:?}"));
    }
    Ok(docs)
}

fn transform_docs(ctx: &FormatCtx, docs: Vec<SourceDoc>) -> Vec<FormattedDoc> {
    docs.into_par_iter()
        .map(|(path, content)| {
            let formatted = format_comment(&content, ctx.options);
            (path, formatted)
        })
        .collect()
}

fn emit_docs(ctx: &FormatCtx, formatted: Vec<FormattedDoc>) -> color_eyre::Result<()> {
    let count = formatted.len();

    for (src_path, html) in formatted {
        let rel = src_path
            .strip_prefix(&ctx.input_dir)
            .map(|p| p.to_owned())
            .map_err(|_| eyre!("Path outside input dir"))?;
        let out_path = ctx.output_dir.join(rel).with_extension(OUTPUT_EXT);

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, html)
            .with_note(|| format!("While writing {}", out_path.display()))?;
    }

    debug!(count, "emitted formatted comments");
    Ok(())
}

trait PipelineStage {}

/// Pipeline typestate driver
struct Pipeline<S: PipelineStage> {
    ctx: FormatCtx,
    state: S,
}

struct Discovered(Vec<PathBuf>);
impl PipelineStage for Discovered {}
struct Loaded(Vec<SourceDoc>);
impl PipelineStage for Loaded {}
struct Formatted(Vec<FormattedDoc>);
impl PipelineStage for Formatted {}
impl PipelineStage for () {}

// initial state
impl Pipeline<()> {
    fn new(ctx: FormatCtx) -> Self {
        Self { ctx, state: () }
    }

    fn discover(self) -> color_eyre::Result<Pipeline<Discovered>> {
        let paths = discover_sources(&self.ctx)?;
        Ok(Pipeline {
            ctx: self.ctx,
            state: Discovered(paths),
        })
    }
}

impl Pipeline<Discovered> {
    fn read(self) -> color_eyre::Result<Pipeline<Loaded>> {
        let docs = read_sources(self.state.0)?;
        Ok(Pipeline {
            ctx: self.ctx,
            state: Loaded(docs),
        })
    }
}

impl Pipeline<Loaded> {
    // The transformer is total, so this stage cannot fail.
    fn transform(self) -> Pipeline<Formatted> {
        let formatted = transform_docs(&self.ctx, self.state.0);
        Pipeline {
            ctx: self.ctx,
            state: Formatted(formatted),
        }
    }
}

impl Pipeline<Formatted> {
    fn emit(self) -> color_eyre::Result<()> {
        emit_docs(&self.ctx, self.state.0)
    }
}
