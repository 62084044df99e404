//! Minetest mod code (`register_node` calls).

use std::fmt::Write as _;

use nbe_project::{Node, Project};

use crate::codegen::{comment_text, ensure_exportable, node_identifiers, quoted, render_error};
use crate::error::FormatResult;
use crate::format::{FileFormat, FormatContext, FormatType};

#[derive(Debug, Clone)]
pub struct LuaFormat {
    mod_name: String,
}

impl LuaFormat {
    pub fn new(context: &FormatContext) -> Self {
        Self {
            mod_name: context.mod_name.clone(),
        }
    }

    fn render(&self, project: &Project, out: &mut String) -> std::fmt::Result {
        writeln!(out, "-- {}", comment_text(&project.name))?;
        writeln!(out, "-- Generated by NodeBoxEditor")?;

        for (node, ident) in project.nodes.iter().zip(node_identifiers(project)) {
            writeln!(out)?;
            self.render_node(node, &ident, out)?;
        }
        Ok(())
    }

    fn render_node(&self, node: &Node, ident: &str, out: &mut String) -> std::fmt::Result {
        let name = format!("{}:{}", self.mod_name, ident);
        writeln!(out, "minetest.register_node({}, {{", quoted(&name))?;

        if !node.tiles.is_empty() {
            writeln!(out, "\ttiles = {{")?;
            for tile in &node.tiles {
                writeln!(out, "\t\t{},", quoted(tile))?;
            }
            writeln!(out, "\t}},")?;
        }

        writeln!(out, "\tdrawtype = \"nodebox\",")?;
        writeln!(out, "\tparamtype = \"light\",")?;
        writeln!(out, "\tnode_box = {{")?;
        writeln!(out, "\t\ttype = \"fixed\",")?;
        writeln!(out, "\t\tfixed = {{")?;
        for nodebox in &node.boxes {
            let b = nodebox.normalized();
            writeln!(
                out,
                "\t\t\t{{{}, {}, {}, {}, {}, {}}}, -- {}",
                b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z,
                comment_text(&b.name)
            )?;
        }
        writeln!(out, "\t\t}}")?;
        writeln!(out, "\t}}")?;
        writeln!(out, "}})")?;
        Ok(())
    }
}

impl FileFormat for LuaFormat {
    fn format_type(&self) -> FormatType {
        FormatType::Lua
    }

    fn as_string(&self, project: &Project) -> FormatResult<String> {
        ensure_exportable(project)?;
        let mut out = String::new();
        self.render(project, &mut out).map_err(render_error)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use nbe_project::NodeBox;

    #[test]
    fn renders_register_node() {
        let mut project = Project::new("stairs");
        let mut node = Node::new("Stair", Vector3::zeros())
            .with_box(NodeBox::full("base"))
            .with_box(NodeBox::new(
                "step",
                Vector3::new(-0.5, 0.0, 0.0),
                Vector3::new(0.5, 0.5, 0.5),
            ));
        node.tiles.push("default_wood.png".to_string());
        project.add_node(node);

        let context = FormatContext {
            mod_name: "stairs".to_string(),
        };
        let code = LuaFormat::new(&context).as_string(&project).unwrap();

        assert!(code.contains("minetest.register_node(\"stairs:stair\", {"));
        assert!(code.contains("\t\t\"default_wood.png\",\n"));
        assert!(code.contains("{-0.5, -0.5, -0.5, 0.5, 0.5, 0.5}, -- base"));
        assert!(code.contains("{-0.5, 0, 0, 0.5, 0.5, 0.5}, -- step"));
        assert!(code.trim_end().ends_with("})"));
    }

    #[test]
    fn empty_project_fails() {
        let format = LuaFormat::new(&FormatContext::default());
        assert!(format.as_string(&Project::new("empty")).is_err());
    }

    #[test]
    fn names_cannot_break_out_of_comments() {
        let mut project = Project::new("demo\nos.execute(\"rm -rf ~\")");
        project.add_node(
            Node::new("Stair", Vector3::zeros()).with_box(NodeBox::full("base\nbroken = (")),
        );
        project.add_node(Node::new("stair", Vector3::zeros()).with_box(NodeBox::full("top")));

        let code = LuaFormat::new(&FormatContext::default())
            .as_string(&project)
            .unwrap();

        assert!(code.starts_with("-- demo os.execute(\"rm -rf ~\")\n"));
        assert!(code.contains("0.5}, -- base broken = (\n"));
        assert!(!code.lines().any(|line| line.trim_start().starts_with("os.execute")));
        assert!(!code.lines().any(|line| line.trim_start().starts_with("broken")));
        assert!(code.contains("minetest.register_node(\"default:stair\", {"));
        assert!(code.contains("minetest.register_node(\"default:stair_2\", {"));
    }
}
