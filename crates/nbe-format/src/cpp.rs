//! Minetest engine code (`ContentFeatures` blocks).

use std::fmt::Write as _;

use nbe_project::{Node, Project};

use crate::codegen::{comment_text, ensure_exportable, node_identifiers, quoted, render_error};
use crate::error::FormatResult;
use crate::format::{FileFormat, FormatContext, FormatType};

#[derive(Debug, Clone)]
pub struct CppFormat {
    mod_name: String,
}

impl CppFormat {
    pub fn new(context: &FormatContext) -> Self {
        Self {
            mod_name: context.mod_name.clone(),
        }
    }

    fn render(&self, project: &Project, out: &mut String) -> std::fmt::Result {
        writeln!(out, "// {}", comment_text(&project.name))?;
        writeln!(out, "// Generated by NodeBoxEditor")?;

        for (node, ident) in project.nodes.iter().zip(node_identifiers(project)) {
            writeln!(out)?;
            self.render_node(node, &ident, out)?;
        }
        Ok(())
    }

    fn render_node(&self, node: &Node, ident: &str, out: &mut String) -> std::fmt::Result {
        let name = format!("{}:{}", self.mod_name, ident);

        writeln!(out, "// {}", comment_text(&node.name))?;
        writeln!(out, "{{")?;
        writeln!(out, "\tContentFeatures f;")?;
        writeln!(out, "\tf.name = {};", quoted(&name))?;
        for (face, tile) in node.tiles.iter().enumerate().take(6) {
            writeln!(out, "\tf.tiledef[{}].name = {};", face, quoted(tile))?;
        }
        writeln!(out, "\tf.drawtype = NDT_NODEBOX;")?;
        writeln!(out, "\tf.param_type = CPT_LIGHT;")?;
        writeln!(out, "\tf.node_box.type = NODEBOX_FIXED;")?;
        for nodebox in &node.boxes {
            let b = nodebox.normalized();
            writeln!(
                out,
                "\tf.node_box.fixed.push_back(aabb3f({}*BS, {}*BS, {}*BS, {}*BS, {}*BS, {}*BS)); // {}",
                b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z,
                comment_text(&b.name)
            )?;
        }
        writeln!(out, "\tnodedef->set(f.name, f);")?;
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl FileFormat for CppFormat {
    fn format_type(&self) -> FormatType {
        FormatType::Cpp
    }

    fn as_string(&self, project: &Project) -> FormatResult<String> {
        ensure_exportable(project)?;
        let mut out = String::new();
        self.render(project, &mut out).map_err(render_error)?;
        Ok(out)
    }
}
