//! Built-in templates for the generated CMake files.
//!
//! Both are rendered with [`crate::util::template`]. A project can replace
//! them by putting its own copy at the configured template paths
//! (`inglued cmaketpl` writes these defaults there as a starting point).

/// Header prepended to every generated file.
pub fn generated_header(file: &str, template: &str) -> String {
    format!(
        "\n\
         # This is an #inglued <> generated {file} (https://github.com/header-only/inglued)\n\
         # To modify it edit {template} ( i.e. Generate it with `inglued cmaketpl` )\n\
         \n"
    )
}

/// Explanation written at the top of scaffolded templates.
///
/// It is a template comment, so it disappears from rendered output. It must
/// not contain double braces, which would end the comment early.
pub const SCAFFOLD_HELP: &str = r#"{{!
  This is an #inglued <> template !

  The template is processed with mustache syntax, more info about
  syntax here : http://mustache.github.io/mustache.5.html
  Values are inserted verbatim, nothing is escaped.

  You can access the following variables :
  * org : github organization name
  * project : current project name
  * project_srcs : current project srcs folder.
  * deps_root : folder the dependencies are fetched into.

  * deps (section) : all deps direct and transitive
    - cmake_package_name : The cmake package name from the package map otherwise: org
    - cmake_target_name : The cmake target name from the package map otherwise: org::name
    - org : the github organization name
    - name : the dependency repository name
    - ref : tag or branch wished for the dep
    - include_path : the path you specified in deps/inglued -I
    - include_path_end_backslash : same as above but with a guaranteed end slash.
    - transitive : true when the dep was hoisted from another dep
}}
"#;

/// Default `CMakeLists.txt` template.
pub const CMAKELISTS_TPL: &str = r#"cmake_minimum_required(VERSION 3.8.2)

project({{project}} VERSION "0.0.1")

set(CMAKE_MODULE_PATH ${CMAKE_MODULE_PATH} "${CMAKE_CURRENT_SOURCE_DIR}/cmake/modules/")

include(GNUInstallDirs)
include(CMakePackageConfigHelpers)

add_library({{project}} INTERFACE)
add_library({{org}}::{{project}} ALIAS {{project}})

target_include_directories({{project}} INTERFACE
  $<BUILD_INTERFACE:${CMAKE_CURRENT_SOURCE_DIR}>
  $<INSTALL_INTERFACE:${CMAKE_INSTALL_INCLUDEDIR}>)

{{#deps}}
# {{org}}/{{name}} @ {{ref}}
if (TARGET {{cmake_target_name}})
  target_link_libraries({{project}} INTERFACE {{cmake_target_name}})
else()
  target_include_directories({{project}} SYSTEM INTERFACE
    $<BUILD_INTERFACE:${CMAKE_CURRENT_SOURCE_DIR}/{{deps_root}}/{{name}}/{{include_path}}>)
endif()

{{/deps}}
install(DIRECTORY {{project_srcs}} DESTINATION ${CMAKE_INSTALL_INCLUDEDIR})
{{#deps}}
install(DIRECTORY {{deps_root}}/{{name}}/{{include_path_end_backslash}} DESTINATION ${CMAKE_INSTALL_INCLUDEDIR})
{{/deps}}

install(TARGETS {{project}} EXPORT {{project}}Targets
  INCLUDES DESTINATION ${CMAKE_INSTALL_INCLUDEDIR})

install(EXPORT {{project}}Targets
  FILE {{project}}Targets.cmake
  NAMESPACE {{org}}::
  DESTINATION ${CMAKE_INSTALL_LIBDIR}/cmake/{{project}})

configure_package_config_file(
  ${CMAKE_CURRENT_SOURCE_DIR}/cmake/modules/Config.cmake.in
  ${CMAKE_CURRENT_BINARY_DIR}/{{project}}Config.cmake
  INSTALL_DESTINATION ${CMAKE_INSTALL_LIBDIR}/cmake/{{project}})

write_basic_package_version_file(
  ${CMAKE_CURRENT_BINARY_DIR}/{{project}}ConfigVersion.cmake
  VERSION ${PROJECT_VERSION}
  COMPATIBILITY SameMajorVersion)

install(FILES
  ${CMAKE_CURRENT_BINARY_DIR}/{{project}}Config.cmake
  ${CMAKE_CURRENT_BINARY_DIR}/{{project}}ConfigVersion.cmake
  DESTINATION ${CMAKE_INSTALL_LIBDIR}/cmake/{{project}})
"#;

/// Default `cmake/modules/Config.cmake.in` template.
pub const PACKAGE_CONFIG_TPL: &str = r#"@PACKAGE_INIT@

include(CMakeFindDependencyMacro)

include("${CMAKE_CURRENT_LIST_DIR}/@PROJECT_NAME@Targets.cmake")
check_required_components("@PROJECT_NAME@")
"#;
