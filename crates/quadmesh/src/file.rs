//! ASCII mesh file reader and printer.
//!
//! The format is INI-like and line oriented. `#` starts a comment that
//! runs to the end of the line; blank lines are skipped. `[Forest Info]`
//! must come first and set `Nk` (tree count) and `Nv` (vertex count)
//! before any per-element section. The per-element sections
//! `[Element to Vertex]`, `[Element to Element]` and `[Element to Face]`
//! each carry `Nk` rows of five integers: the element index followed by
//! its four entries. All indices in the file are 1-based; storage is
//! 0-based.
//!
//! ```text
//! [Forest Info]
//! Nk = 2      # Number of elements
//! Nv = 6      # Number of mesh vertices
//! [Element to Vertex]
//!     1    1    2    4    5
//!     2    2    3    5    6
//! ...
//! ```

use std::io::{self, BufRead, Write};

use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::connectivity::Connectivity;

/// Errors of the mesh file reader.
#[derive(Debug, Error)]
pub enum MeshFileError {
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("line {line}: sections must end with ']'")]
  UnterminatedSection { line: usize },

  #[error("line {line}: unknown section [{name}]")]
  UnknownSection { name: String, line: usize },

  #[error("line {line}: content before any section")]
  ContentBeforeSection { line: usize },

  #[error("line {line}: [Forest Info] entries must be key = value pairs")]
  BadInfoEntry { line: usize },

  #[error("[Forest Info] must come first and set Nk and Nv")]
  MissingForestInfo,

  #[error("line {line}: bad {section} entry")]
  BadEntry { section: &'static str, line: usize },

  #[error("not enough entries in {section}: expected {expected}, found {found}")]
  TruncatedSection {
    section: &'static str,
    expected: usize,
    found: usize,
  },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Section {
  None,
  Info,
  Coordinates,
  ElemToVertex,
  ElemToElem,
  ElemToFace,
  ElemTags,
  FaceTags,
  CurvedFaces,
  CurvedTypes,
}

impl Section {
  fn from_name(name: &str) -> Option<Self> {
    match name {
      "Forest Info" => Some(Section::Info),
      "Coordinates of Element Vertices" => Some(Section::Coordinates),
      "Element to Vertex" => Some(Section::ElemToVertex),
      "Element to Element" => Some(Section::ElemToElem),
      "Element to Face" => Some(Section::ElemToFace),
      "Element Tags" => Some(Section::ElemTags),
      "Face Tags" => Some(Section::FaceTags),
      "Curved Faces" => Some(Section::CurvedFaces),
      "Curved Types" => Some(Section::CurvedTypes),
      _ => None,
    }
  }

  /// Display name of the sections whose row count is checked.
  fn counted_name(self) -> Option<&'static str> {
    match self {
      Section::ElemToVertex => Some("[Element to Vertex]"),
      Section::ElemToElem => Some("[Element to Element]"),
      Section::ElemToFace => Some("[Element to Face]"),
      _ => None,
    }
  }
}

/// Strip the `#` comment and surrounding whitespace.
fn trim_line(line: &str) -> &str {
  let line = match line.find('#') {
    Some(pos) => &line[..pos],
    None => line,
  };
  line.trim()
}

/// Parse `k a b c d` and convert every entry to 0-based.
fn parse_row(
  line: &str,
  section: &'static str,
  line_no: usize,
) -> Result<[i32; 5], MeshFileError> {
  let values: SmallVec<[i32; 5]> = line
    .split_whitespace()
    .map(|tok| tok.parse::<i32>())
    .collect::<Result<_, _>>()
    .map_err(|_| MeshFileError::BadEntry { section, line: line_no })?;
  if values.len() != 5 {
    return Err(MeshFileError::BadEntry { section, line: line_no });
  }
  let mut row = [0i32; 5];
  for (slot, value) in row.iter_mut().zip(values) {
    *slot = value - 1;
  }
  Ok(row)
}

/// Read a connectivity record from sectioned ASCII input.
///
/// The partially built record is dropped on any error.
pub fn read_connectivity<R: BufRead>(reader: R) -> Result<Connectivity, MeshFileError> {
  let mut section = Section::None;
  let mut section_rows = 0usize;
  let mut num_trees: Option<i32> = None;
  let mut num_vertices: Option<i32> = None;
  let mut conn: Option<Connectivity> = None;

  for (idx, line) in reader.lines().enumerate() {
    let line_no = idx + 1;
    let line = line?;
    let line = trim_line(&line);

    if line.is_empty() {
      continue;
    }

    if let Some(rest) = line.strip_prefix('[') {
      // Row-count check before leaving a per-element section.
      if let Some(name) = section.counted_name() {
        let expected = conn.as_ref().map_or(0, |c| c.num_trees as usize);
        if section_rows != expected {
          return Err(MeshFileError::TruncatedSection {
            section: name,
            expected,
            found: section_rows,
          });
        }
      }

      let name = rest
        .strip_suffix(']')
        .ok_or(MeshFileError::UnterminatedSection { line: line_no })?;
      section = Section::from_name(name).ok_or_else(|| MeshFileError::UnknownSection {
        name: name.to_string(),
        line: line_no,
      })?;
      if section != Section::Info && conn.is_none() {
        return Err(MeshFileError::MissingForestInfo);
      }
      debug!(section = name, line = line_no, "entering mesh file section");
      section_rows = 0;
      continue;
    }

    match section {
      Section::None => return Err(MeshFileError::ContentBeforeSection { line: line_no }),
      Section::Info => {
        let (key, value) = line
          .split_once('=')
          .ok_or(MeshFileError::BadInfoEntry { line: line_no })?;
        match key.trim() {
          "Nk" => {
            num_trees = Some(value.trim().parse().map_err(|_| MeshFileError::BadInfoEntry {
              line: line_no,
            })?)
          }
          "Nv" => {
            num_vertices = Some(value.trim().parse().map_err(|_| {
              MeshFileError::BadInfoEntry { line: line_no }
            })?)
          }
          // Version and tag counters are accepted and ignored.
          _ => {}
        }
        if conn.is_none() {
          if let (Some(nk), Some(nv)) = (num_trees, num_vertices) {
            conn = Some(Connectivity::new(nk, nv));
          }
        }
      }
      Section::ElemToVertex => {
        let conn = conn.as_mut().expect("per-element section requires tables");
        let [k, v0, v1, v2, v3] = parse_row(line, "[Element to Vertex]", line_no)?;
        let in_range = |v: i32| (0..conn.num_vertices).contains(&v);
        if !(0..conn.num_trees).contains(&k) || ![v0, v1, v2, v3].iter().all(|&v| in_range(v)) {
          return Err(MeshFileError::BadEntry {
            section: "[Element to Vertex]",
            line: line_no,
          });
        }
        conn.tree_to_vertex[k as usize * 4..k as usize * 4 + 4]
          .copy_from_slice(&[v0, v1, v2, v3]);
        section_rows += 1;
      }
      Section::ElemToElem => {
        let conn = conn.as_mut().expect("per-element section requires tables");
        let [k, k0, k1, k2, k3] = parse_row(line, "[Element to Element]", line_no)?;
        let in_range = |v: i32| (0..conn.num_trees).contains(&v);
        if !in_range(k) || ![k0, k1, k2, k3].iter().all(|&v| in_range(v)) {
          return Err(MeshFileError::BadEntry {
            section: "[Element to Element]",
            line: line_no,
          });
        }
        conn.tree_to_tree[k as usize * 4..k as usize * 4 + 4].copy_from_slice(&[k0, k1, k2, k3]);
        section_rows += 1;
      }
      Section::ElemToFace => {
        let conn = conn.as_mut().expect("per-element section requires tables");
        let [k, f0, f1, f2, f3] = parse_row(line, "[Element to Face]", line_no)?;
        if !(0..conn.num_trees).contains(&k) || ![f0, f1, f2, f3].iter().all(|&f| (0..4).contains(&f))
        {
          return Err(MeshFileError::BadEntry {
            section: "[Element to Face]",
            line: line_no,
          });
        }
        for (i, f) in [f0, f1, f2, f3].into_iter().enumerate() {
          conn.tree_to_face[k as usize * 4 + i] = f as i8;
        }
        section_rows += 1;
      }
      // Coordinate, tag and curve sections are accepted and ignored.
      Section::Coordinates
      | Section::ElemTags
      | Section::FaceTags
      | Section::CurvedFaces
      | Section::CurvedTypes => {}
    }
  }

  // Row-count check for a per-element section ending at EOF.
  if let Some(name) = section.counted_name() {
    let expected = conn.as_ref().map_or(0, |c| c.num_trees as usize);
    if section_rows != expected {
      return Err(MeshFileError::TruncatedSection {
        section: name,
        expected,
        found: section_rows,
      });
    }
  }

  conn.ok_or(MeshFileError::MissingForestInfo)
}

/// Write a connectivity record in the sectioned ASCII format.
///
/// All indices are written 1-based; [`read_connectivity`] accepts the
/// output unchanged.
pub fn print_connectivity<W: Write>(conn: &Connectivity, out: &mut W) -> io::Result<()> {
  writeln!(out, "[Forest Info]")?;
  writeln!(out, "ver = 0.0.1  # Version of the forest file")?;
  writeln!(out, "Nk  = {}      # Number of elements", conn.num_trees)?;
  writeln!(out, "Nv  = {}      # Number of mesh vertices", conn.num_vertices)?;
  writeln!(out, "Net = 0      # Number of element tags")?;
  writeln!(out, "Nft = 0      # Number of face tags")?;
  writeln!(out, "Ncf = 0      # Number of curved faces")?;
  writeln!(out, "Nct = 0      # Number of curved types")?;
  writeln!(out)?;
  writeln!(out, "[Coordinates of Element Vertices]")?;
  writeln!(out, "[Element to Vertex]")?;
  for k in 0..conn.num_trees as usize {
    let row = &conn.tree_to_vertex[k * 4..k * 4 + 4];
    writeln!(
      out,
      "    {}    {}    {}    {}    {}",
      k + 1,
      row[0] + 1,
      row[1] + 1,
      row[2] + 1,
      row[3] + 1
    )?;
  }
  writeln!(out, "[Element to Element]")?;
  for k in 0..conn.num_trees as usize {
    let row = &conn.tree_to_tree[k * 4..k * 4 + 4];
    writeln!(
      out,
      "    {}    {}    {}    {}    {}",
      k + 1,
      row[0] + 1,
      row[1] + 1,
      row[2] + 1,
      row[3] + 1
    )?;
  }
  writeln!(out, "[Element to Face]")?;
  for k in 0..conn.num_trees as usize {
    let row = &conn.tree_to_face[k * 4..k * 4 + 4];
    writeln!(
      out,
      "    {}    {}    {}    {}    {}",
      k + 1,
      row[0] + 1,
      row[1] + 1,
      row[2] + 1,
      row[3] + 1
    )?;
  }
  writeln!(out, "[Element Tags]")?;
  writeln!(out, "[Face Tags]")?;
  writeln!(out, "[Curved Faces]")?;
  writeln!(out, "[Curved Types]")?;
  Ok(())
}

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;
